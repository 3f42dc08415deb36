//! # Application State
//!
//! Core state for Pati. No TUI types here; presentation state (highlighted
//! row, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // read-only dog list
//! ├── route: Route              // List | Detail(position)
//! ├── location: String          // list screen location bar
//! └── shelter_location: String  // detail screen info card
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::{Catalog, Record};
use crate::core::config::ResolvedConfig;

/// The screen currently shown. `Detail` carries a catalog position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail(usize),
}

pub struct App {
    pub catalog: Catalog,
    pub route: Route,
    pub location: String,
    pub shelter_location: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            route: Route::List,
            location: crate::core::config::DEFAULT_LOCATION.to_string(),
            shelter_location: crate::core::config::DEFAULT_SHELTER_LOCATION.to_string(),
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self {
            location: config.location.clone(),
            shelter_location: config.shelter_location.clone(),
            ..Self::new(catalog)
        }
    }

    /// The record behind the current route, if a detail screen is open.
    pub fn current_record(&self) -> Option<&Record> {
        match self.route {
            Route::List => None,
            Route::Detail(position) => Some(self.catalog.record(position)),
        }
    }
}
