//! # NavBar Component
//!
//! Bottom tab bar of the list screen. Home is the only real destination, so
//! it is always the active tab; the others are drawn for completeness. The
//! bottom border carries the key help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const INACTIVE_TABS: [&str; 3] = ["✉", "♡", "☺"];

pub struct NavBar<'a> {
    pub help: &'a str,
    pub theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(help: &'a str, theme: &'a Theme) -> Self {
        Self { help, theme }
    }
}

impl<'a> Component for NavBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(self.help).centered());

        let mut spans = vec![Span::styled(
            " ⌂ Home ",
            Style::default()
                .fg(self.theme.on_primary())
                .bg(self.theme.primary())
                .add_modifier(Modifier::BOLD),
        )];
        for tab in INACTIVE_TABS {
            spans.push(Span::raw("     "));
            spans.push(Span::styled(tab, Style::default().fg(Color::Gray)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
