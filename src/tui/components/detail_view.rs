//! # DetailView Component
//!
//! Full-screen view of one dog.
//!
//! ```text
//! ┌────────────── hero image ──────────────┐┌thumb┐
//! │                                        │├thumb┤
//! └────────────────────────────────────────┘└─────┘
//! ╭ name                                   ♂ ╮
//! │ age  breed                               │
//! ╰ shelter location                         ╯
//! [owner]  Owner Name                  [☎] [✉]
//!          Owner
//! description...
//! [♡] [            ADOPT                    ]
//! ```
//!
//! Stateless: everything comes in as props each frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::catalog::Record;
use crate::core::presentation::{describe, has_gallery, split_place};
use crate::tui::component::Component;
use crate::tui::components::image_tile::ImageTile;
use crate::tui::theme::Theme;

const THUMB_WIDTH: u16 = 14;
const THUMB_HEIGHT: u16 = 3;
const OWNER_TILE_WIDTH: u16 = 11;
const BUTTON_WIDTH: u16 = 5;

pub struct DetailView<'a> {
    pub record: &'a Record,
    pub shelter_location: &'a str,
    pub theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(record: &'a Record, shelter_location: &'a str, theme: &'a Theme) -> Self {
        Self {
            record,
            shelter_location,
            theme,
        }
    }

    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let hero_area = if has_gallery(self.record) {
            let [hero, _, strip] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(THUMB_WIDTH),
            ])
            .areas(area);
            self.render_thumbnails(frame, strip);
            hero
        } else {
            area
        };
        frame.render_widget(ImageTile::new(self.record.cover_image(), self.theme), hero_area);
    }

    fn render_thumbnails(&self, frame: &mut Frame, area: Rect) {
        let mut y = area.y;
        for (index, image) in self.record.images.iter().enumerate() {
            if y + THUMB_HEIGHT > area.y + area.height {
                break;
            }
            let tile = ImageTile::new(image, self.theme)
                .show_label(false)
                .highlighted(index == 0);
            frame.render_widget(tile, Rect::new(area.x, y, area.width, THUMB_HEIGHT));
            y += THUMB_HEIGHT;
        }
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(false))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name_row, facts_row, place_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        let [name_area, sex_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(name_row);

        frame.render_widget(
            Paragraph::new(self.record.name.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            name_area,
        );
        frame.render_widget(
            Paragraph::new(self.record.sex.symbol())
                .style(
                    Style::default()
                        .fg(self.theme.sex_color(self.record.sex))
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Right),
            sex_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    self.record.age.as_str(),
                    Style::default().fg(self.theme.muted()),
                ),
                Span::raw(" "),
                Span::styled(
                    self.record.breed.as_str(),
                    Style::default()
                        .fg(self.theme.primary())
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            facts_row,
        );

        let (place, rest) = split_place(self.shelter_location);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(place, Style::default().fg(self.theme.muted())),
                Span::styled(rest, Style::default().add_modifier(Modifier::BOLD)),
            ])),
            place_row,
        );
    }

    fn render_owner(&self, frame: &mut Frame, area: Rect) {
        let [tile_area, _, text_area, buttons_area] = Layout::horizontal([
            Constraint::Length(OWNER_TILE_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH * 2 + 1),
        ])
        .areas(area);

        frame.render_widget(
            ImageTile::new(&self.record.owner_image, self.theme).show_label(false),
            tile_area,
        );

        let top = text_area.height.saturating_sub(2) / 2;
        let text_rect = Rect::new(
            text_area.x,
            text_area.y + top,
            text_area.width,
            text_area.height.min(2),
        );
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    self.record.owner_name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Owner",
                    Style::default()
                        .fg(self.theme.muted())
                        .add_modifier(Modifier::BOLD),
                )),
            ]),
            text_rect,
        );

        let button_top = buttons_area.height.saturating_sub(3) / 2;
        let [phone_area, _, message_area] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(Rect::new(
            buttons_area.x,
            buttons_area.y + button_top,
            buttons_area.width,
            buttons_area.height.min(3),
        ));
        frame.render_widget(glyph_button("☎", self.theme.phone()), phone_area);
        frame.render_widget(glyph_button("✉", self.theme.message()), message_area);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect) {
        let [fav_area, _, adopt_area] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(glyph_button("♡", Color::Reset), fav_area);
        frame.render_widget(
            Paragraph::new("ADOPT")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(self.theme.border(true)),
                ),
            adopt_area,
        );
    }
}

fn glyph_button(glyph: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(glyph)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
}

impl<'a> Component for DetailView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [hero, info, owner, description, actions] = Layout::vertical([
            Constraint::Fill(3),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Length(3),
        ])
        .areas(area);

        self.render_hero(frame, hero);
        self.render_info(frame, info);
        self.render_owner(frame, owner);

        frame.render_widget(
            Paragraph::new(describe(self.record))
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::new(1, 1, 1, 0))),
            description,
        );

        self.render_actions(frame, actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Catalog, Sex};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_detail(position: usize, theme: &Theme) -> Terminal<TestBackend> {
        let catalog = Catalog::builtin();
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DetailView::new(catalog.record(position), "Çankaya, Ankara", theme)
                    .render(f, f.area());
            })
            .unwrap();
        terminal
    }

    fn render_detail(position: usize) -> String {
        buffer_text(&draw_detail(position, &Theme::default()))
    }

    #[test]
    fn test_detail_shows_every_field() {
        let catalog = Catalog::builtin();
        for (position, record) in catalog.iter().enumerate() {
            let text = render_detail(position);
            assert!(text.contains(&record.name), "name for {position}");
            assert!(text.contains(&record.breed), "breed for {position}");
            assert!(text.contains(&record.age), "age for {position}");
            assert!(text.contains(&record.owner_name), "owner for {position}");
            assert!(text.contains(record.sex.symbol()));
            assert!(text.contains(&format!("{} is a puppy", record.sex.pronoun())));
        }
    }

    #[test]
    fn test_lulu_description_uses_she() {
        let text = render_detail(1);
        assert!(text.contains("Lulu arrived to the shelter today."));
        assert!(text.contains("She is a puppy"));
        assert!(!text.contains("He is a puppy"));
    }

    #[test]
    fn test_name_keeps_its_colour_beside_sex_symbol() {
        let theme = Theme::default();
        let terminal = draw_detail(1, &theme);
        let buffer = terminal.backend().buffer();
        let area = buffer.area;

        let name_start = (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right().saturating_sub(3)).map(move |x| (x, y)))
            .find(|&(x, y)| {
                "Lulu"
                    .chars()
                    .enumerate()
                    .all(|(i, c)| buffer[(x + i as u16, y)].symbol() == c.to_string())
            })
            .expect("name rendered");

        let female = theme.sex_color(Sex::Female);
        assert_ne!(buffer[name_start].fg, female);
        let symbol = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "♀")
            .expect("sex symbol rendered");
        assert_eq!(symbol.fg, female);
    }

    #[test]
    fn test_gallery_strip_only_with_multiple_images() {
        let niko = render_detail(0);
        assert!(niko.contains("golden2"));
        assert!(niko.contains("golden3"));

        let ernie = render_detail(2);
        // Only the hero label; no strip
        assert_eq!(ernie.matches("pomeranian1").count(), 1);
    }

    #[test]
    fn test_detail_chrome() {
        let text = render_detail(2);
        assert!(text.contains("ADOPT"));
        assert!(text.contains("Owner"));
        assert!(text.contains("Çankaya"));
        assert!(text.contains(", Ankara"));
    }
}
