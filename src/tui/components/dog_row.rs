//! # DogRow Component
//!
//! One list entry: an image tile and a card side by side. Which side the
//! image sits on comes from [`RowLayout::for_position`], so rows alternate.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Widget;

use crate::core::catalog::Record;
use crate::core::presentation::RowLayout;
use crate::tui::components::dog_card::{CARD_HEIGHT, DogCard};
use crate::tui::components::image_tile::ImageTile;
use crate::tui::theme::Theme;

/// Height of a full row (the image tile is taller than the card).
pub const ROW_HEIGHT: u16 = 8;
pub const IMAGE_WIDTH: u16 = 20;

#[derive(Clone, Copy)]
pub struct DogRow<'a> {
    pub record: &'a Record,
    pub position: usize,
    pub highlighted: bool,
    pub theme: &'a Theme,
}

impl<'a> Widget for DogRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = RowLayout::for_position(self.position);
        let (image_area, card_column) = match layout {
            RowLayout::ImageFirst => {
                let [image, _, card] = Layout::horizontal([
                    Constraint::Length(IMAGE_WIDTH),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);
                (image, card)
            }
            RowLayout::CardFirst => {
                let [card, _, image] = Layout::horizontal([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(IMAGE_WIDTH),
                ])
                .areas(area);
                (image, card)
            }
        };

        // Card is shorter than the tile; center it vertically
        let card_top = card_column.height.saturating_sub(CARD_HEIGHT) / 2;
        let card_area = Rect::new(
            card_column.x,
            card_column.y + card_top,
            card_column.width,
            CARD_HEIGHT.min(card_column.height),
        );

        ImageTile::new(self.record.cover_image(), self.theme)
            .highlighted(self.highlighted)
            .render(image_area, buf);
        DogCard::new(self.record, self.highlighted, self.theme).render(card_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Column of the first cell on the middle row that holds the name's first letter.
    fn name_column(position: usize) -> u16 {
        let catalog = Catalog::builtin();
        let theme = Theme::default();
        let record = catalog.record(position);
        let backend = TestBackend::new(60, ROW_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let row = DogRow {
                    record,
                    position,
                    highlighted: false,
                    theme: &theme,
                };
                f.render_widget(row, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let first = record.name.chars().next().unwrap().to_string();
        // Name is on the first content line of the card: card top + 1
        let y = (ROW_HEIGHT - CARD_HEIGHT) / 2 + 1;
        (0..60)
            .find(|&x| buffer[(x, y)].symbol() == first)
            .expect("name rendered")
    }

    #[test]
    fn test_even_rows_put_image_left() {
        assert!(name_column(0) > IMAGE_WIDTH);
    }

    #[test]
    fn test_odd_rows_put_image_right() {
        assert!(name_column(1) < 60 - IMAGE_WIDTH);
        assert!(name_column(1) < IMAGE_WIDTH);
    }
}
