//! # ImageTile Component
//!
//! A bordered box standing in for a picture. Shows the bundled art for the
//! image when it fits, otherwise the image's name.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::catalog::ImageRef;
use crate::tui::art;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

#[derive(Clone, Copy)]
pub struct ImageTile<'a> {
    pub image: &'a ImageRef,
    /// Marks the current image in a gallery strip.
    pub highlighted: bool,
    /// Print the image name on the bottom border.
    pub show_label: bool,
    pub theme: &'a Theme,
}

impl<'a> ImageTile<'a> {
    pub fn new(image: &'a ImageRef, theme: &'a Theme) -> Self {
        Self {
            image,
            highlighted: false,
            show_label: true,
            theme,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }
}

impl<'a> Widget for ImageTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(self.highlighted));
        if self.show_label {
            block = block.title_bottom(Line::from(format!(" {} ", self.image)).centered());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let art = art::lookup(self.image).filter(|art| {
            let (w, h) = art::dimensions(art);
            w <= inner.width && h <= inner.height
        });

        let style = Style::default()
            .fg(self.theme.accent())
            .add_modifier(Modifier::BOLD);

        match art {
            Some(art) => {
                // Art lines keep their relative indentation: center the block, not each line
                let (width, height) = art::dimensions(art);
                let left = (inner.width - width) / 2;
                let top = (inner.height - height) / 2;
                let target = Rect::new(inner.x + left, inner.y + top, width, height);
                Paragraph::new(art).style(style).render(target, buf);
            }
            None => {
                let text = if self.show_label {
                    "▒▒".to_string()
                } else {
                    self.image.to_string()
                };
                let top = inner.height.saturating_sub(1) / 2;
                let target = Rect::new(inner.x, inner.y + top, inner.width, inner.height.min(1));
                Paragraph::new(text)
                    .style(style)
                    .alignment(Alignment::Center)
                    .render(target, buf);
            }
        }
    }
}

impl<'a> Component for ImageTile<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
