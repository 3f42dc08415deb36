//! # LocationBar Component
//!
//! Rounded box with the user's location, plus a filter button beside it.
//! The filter button is decorative.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::presentation::split_place;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const FILTER_WIDTH: u16 = 5;

pub struct LocationBar<'a> {
    pub location: &'a str,
    pub theme: &'a Theme,
}

impl<'a> LocationBar<'a> {
    pub fn new(location: &'a str, theme: &'a Theme) -> Self {
        Self { location, theme }
    }
}

impl<'a> Component for LocationBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [location_area, _, filter_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(FILTER_WIDTH),
        ])
        .areas(area);

        let (place, rest) = split_place(self.location);
        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(self.theme.primary())),
            Span::styled(
                place,
                Style::default()
                    .fg(self.theme.primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(rest, Style::default().add_modifier(Modifier::BOLD)),
        ]);

        frame.render_widget(
            Paragraph::new(line).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border(false))
                    .padding(Padding::horizontal(1)),
            ),
            location_area,
        );
        frame.render_widget(
            Paragraph::new("⚙").alignment(Alignment::Center).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border(false)),
            ),
            filter_area,
        );
    }
}
