//! # TopBar Component
//!
//! Brand line at the top of the list screen: the app name on the left and a
//! menu glyph on the right. Stateless; all props are fields.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const APP_NAME: &str = "Pati";

pub struct TopBar<'a> {
    pub theme: &'a Theme,
}

impl<'a> TopBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl<'a> Component for TopBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(2));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Line::from(vec![
            Span::styled("✻ ", Style::default().fg(self.theme.accent())),
            Span::styled(
                APP_NAME,
                Style::default()
                    .fg(self.theme.primary())
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        ]);
        frame.render_widget(Paragraph::new(brand), inner);
        frame.render_widget(
            Paragraph::new("≡").alignment(Alignment::Right),
            inner,
        );
    }
}
