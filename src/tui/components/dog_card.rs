//! # DogCard Component
//!
//! The text half of a list row: name and sex symbol, breed, age, and the
//! current owner. The owner's picture is named on the bottom border.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::catalog::Record;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Borders (2) plus the four content lines.
pub const CARD_HEIGHT: u16 = 6;

#[derive(Clone, Copy)]
pub struct DogCard<'a> {
    pub record: &'a Record,
    pub highlighted: bool,
    pub theme: &'a Theme,
}

impl<'a> DogCard<'a> {
    pub fn new(record: &'a Record, highlighted: bool, theme: &'a Theme) -> Self {
        Self {
            record,
            highlighted,
            theme,
        }
    }
}

impl<'a> Widget for DogCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(self.highlighted))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" ☺ {} ", self.record.owner_image),
                    Style::default().fg(self.theme.muted()),
                ))
                .right_aligned(),
            )
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_row, breed_row, age_row, owner_row] =
            Layout::vertical([Constraint::Length(1); 4]).areas(inner);

        let [name_area, sex_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(name_row);

        Paragraph::new(self.record.name.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(name_area, buf);
        Paragraph::new(self.record.sex.symbol())
            .style(
                Style::default()
                    .fg(self.theme.sex_color(self.record.sex))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right)
            .render(sex_area, buf);

        Paragraph::new(self.record.breed.as_str())
            .style(Style::default().fg(self.theme.primary()))
            .render(breed_row, buf);

        Paragraph::new(self.record.age.as_str())
            .style(Style::default().fg(self.theme.muted()))
            .render(age_row, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Owner ", Style::default().fg(self.theme.accent())),
            Span::styled(
                self.record.owner_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(owner_row, buf);
    }
}

impl<'a> Component for DogCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
