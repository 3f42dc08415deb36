//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TopBar`: Brand line at the top of the list screen
//! - `LocationBar`: User location and filter button
//! - `NavBar`: Bottom tabs and key help
//! - `ImageTile`, `DogCard`, `DogRow`: the pieces of a list row
//! - `DetailView`: the whole detail screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `DogList`: Scrollable list of rows; emits `ListEvent::Open(position)`
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! DetailView::new(record, &app.shelter_location, &theme).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── top_bar.rs
//! ├── location_bar.rs
//! ├── nav_bar.rs
//! ├── image_tile.rs    (picture placeholder with bundled art)
//! ├── dog_card.rs      (text half of a row)
//! ├── dog_row.rs       (tile + card, alternating sides)
//! ├── dog_list.rs      (scrollable list + state)
//! └── detail_view.rs
//! ```

pub mod detail_view;
pub mod dog_card;
pub mod dog_list;
pub mod dog_row;
pub mod image_tile;
pub mod location_bar;
pub mod nav_bar;
pub mod top_bar;

pub use detail_view::DetailView;
pub use dog_list::{DogList, DogListState, ListEvent};
pub use location_bar::LocationBar;
pub use nav_bar::NavBar;
pub use top_bar::TopBar;
