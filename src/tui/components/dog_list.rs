//! # DogList Component
//!
//! Scrollable list screen body: the quote, then one [`DogRow`] per catalog
//! entry in catalog order.
//!
//! ## Architecture
//!
//! `DogList` is a transient component (created each frame) that wraps
//! `&'a mut DogListState` (persistent state) and the `Catalog` (props).
//! The highlighted row and scroll offset live in the state so they survive
//! a trip to the detail screen and back.
//!
//! ## Geometry
//!
//! ```text
//! y = 0                      quote (wrapped) + 1 blank line
//! y = quote_height           row 0
//! y = quote_height + 1 * (ROW_HEIGHT + ROW_GAP)   row 1
//! ...
//! ```
//!
//! Rows have a fixed height, so hit testing and scroll-to-selected are
//! arithmetic on the cached quote height.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Catalog;
use crate::core::presentation::LIST_QUOTE;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::dog_row::{DogRow, ROW_HEIGHT};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Blank lines between rows.
pub const ROW_GAP: u16 = 1;
/// Horizontal inset of the quote on each side.
const QUOTE_PAD_H: u16 = 4;

/// Persistent state for the list screen. Lives in `TuiState`.
pub struct DogListState {
    /// Number of rows (catalog length).
    pub len: usize,
    /// Highlighted row position.
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Quote height from the last render, including the blank line after it.
    pub quote_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Set when the selection moved and the next render should reveal it.
    scroll_pending: bool,
}

/// Events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the dog at this catalog position.
    Open(usize),
}

impl DogListState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: 0,
            scroll_state: ScrollViewState::default(),
            quote_height: 0,
            viewport_height: 0,
            scroll_pending: false,
        }
    }

    /// Content-space y coordinate of the top of row `position`.
    /// Saturates at `u16::MAX` for positions past the coordinate space.
    pub fn row_top(&self, position: usize) -> u16 {
        let position = u16::try_from(position).unwrap_or(u16::MAX);
        self.quote_height
            .saturating_add(position.saturating_mul(ROW_HEIGHT + ROW_GAP))
    }

    pub fn content_height(&self) -> u16 {
        if self.len == 0 {
            return self.quote_height;
        }
        self.row_top(self.len - 1).saturating_add(ROW_HEIGHT)
    }

    /// Which row, if any, covers the content-space y coordinate.
    pub fn row_at(&self, content_y: u16) -> Option<usize> {
        let y = content_y.checked_sub(self.quote_height)?;
        let stride = ROW_HEIGHT + ROW_GAP;
        let position = (y / stride) as usize;
        (position < self.len && y % stride < ROW_HEIGHT).then_some(position)
    }

    /// Hit test a screen coordinate against the list drawn in `area`.
    pub fn hit_test(&self, screen_y: u16, area: Rect) -> Option<usize> {
        if screen_y < area.y || screen_y >= area.y + area.height {
            return None;
        }
        let content_y = (screen_y - area.y).saturating_add(self.scroll_state.offset().y);
        self.row_at(content_y)
    }

    pub fn select(&mut self, position: usize) {
        if position < self.len {
            self.selected = position;
            self.scroll_pending = true;
        }
    }

    /// Adjust the scroll offset so the highlighted row is fully visible.
    /// The first row also reveals the quote above it.
    pub fn scroll_to_selected(&mut self) {
        let offset = self.scroll_state.offset();
        let top = if self.selected == 0 {
            0
        } else {
            self.row_top(self.selected)
        };
        let bottom = self.row_top(self.selected).saturating_add(ROW_HEIGHT);

        let y = if top < offset.y {
            top
        } else if bottom > offset.y + self.viewport_height {
            bottom.saturating_sub(self.viewport_height)
        } else {
            offset.y
        };
        self.scroll_state.set_offset(Position { x: offset.x, y });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DogListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.selected + 1).min(self.len - 1));
                None
            }
            TuiEvent::CursorFirst => {
                self.select(0);
                None
            }
            TuiEvent::CursorLast => {
                self.select(self.len - 1);
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::Submit => Some(ListEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Height of the wrapped quote plus one blank line.
///
/// The wrapping options match Ratatui's `Paragraph` wrapping so the
/// predicted height equals the rendered one.
pub fn quote_height(width: u16) -> u16 {
    let content_width = width.saturating_sub(QUOTE_PAD_H * 2);
    if content_width == 0 {
        return 2;
    }
    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(LIST_QUOTE, options);
    (lines.len() as u16).max(1) + 1
}

/// Transient render wrapper for the list body.
pub struct DogList<'a> {
    state: &'a mut DogListState,
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> DogList<'a> {
    pub fn new(state: &'a mut DogListState, catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self {
            state,
            catalog,
            theme,
        }
    }
}

impl<'a> Component for DogList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Update layout cache
        self.state.len = self.catalog.len();
        self.state.quote_height = quote_height(content_width);
        self.state.viewport_height = area.height;
        let total_height = self.state.content_height();

        // 2. Scroll
        if self.state.scroll_pending {
            self.state.scroll_to_selected();
            self.state.scroll_pending = false;
        }
        self.state.clamp_scroll();

        // 3. Draw into the scroll canvas
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let quote_rect = Rect::new(
            QUOTE_PAD_H.min(content_width),
            0,
            content_width.saturating_sub(QUOTE_PAD_H * 2),
            self.state.quote_height.saturating_sub(1),
        );
        scroll_view.render_widget(
            Paragraph::new(LIST_QUOTE)
                .style(
                    Style::default()
                        .fg(self.theme.muted())
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            quote_rect,
        );

        for (position, record) in self.catalog.iter().enumerate() {
            let row_rect = Rect::new(0, self.state.row_top(position), content_width, ROW_HEIGHT);
            let row = DogRow {
                record,
                position,
                highlighted: position == self.state.selected,
                theme: self.theme,
            };
            scroll_view.render_widget(row, row_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
