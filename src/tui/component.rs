use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Screen pieces get their data as struct fields, built fresh each frame.
/// `render` takes `&mut self` so wrappers like `DogList` can write layout
/// caches and scroll offsets back into the state they borrow.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns terminal input into a component-level event.
///
/// Returns `None` when the input only changed local state (moving the
/// highlight, scrolling) or was not meant for this component.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
