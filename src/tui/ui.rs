use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, DogList, LocationBar, NavBar, TopBar};
use crate::tui::theme::Theme;

pub const LIST_HELP: &str = " ↑↓ Select  Enter Open  q Quit ";
pub const DETAIL_HELP: &str = " Esc Back  q Quit ";

/// Screen regions of the list route.
pub struct ListAreas {
    pub top_bar: Rect,
    pub location: Rect,
    pub list: Rect,
    pub nav_bar: Rect,
}

pub fn list_areas(area: Rect) -> ListAreas {
    use Constraint::{Length, Min};
    let [top_bar, location, list, nav_bar] =
        Layout::vertical([Length(2), Length(3), Min(0), Length(3)]).areas(area);
    ListAreas {
        top_bar,
        location,
        list,
        nav_bar,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, theme: &Theme) {
    match app.route {
        Route::List => draw_list(frame, app, tui, theme),
        Route::Detail(position) => draw_detail(frame, app, position, theme),
    }
}

fn draw_list(frame: &mut Frame, app: &App, tui: &mut TuiState, theme: &Theme) {
    let areas = list_areas(frame.area());

    TopBar::new(theme).render(frame, areas.top_bar);
    LocationBar::new(&app.location, theme).render(frame, areas.location);
    DogList::new(&mut tui.list, &app.catalog, theme).render(frame, areas.list);
    NavBar::new(LIST_HELP, theme).render(frame, areas.nav_bar);
}

fn draw_detail(frame: &mut Frame, app: &App, position: usize, theme: &Theme) {
    use Constraint::{Length, Min};
    let [body, help] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    let record = app.catalog.record(position);
    DetailView::new(record, &app.shelter_location, theme).render(frame, body);

    frame.render_widget(
        Paragraph::new(Line::from(DETAIL_HELP).centered())
            .style(Style::default().fg(Color::DarkGray)),
        help,
    );
}
