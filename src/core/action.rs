//! # Actions
//!
//! Everything that can happen in Pati becomes an `Action`.
//! User picks a dog? That's `Action::OpenDetail(position)`.
//! User backs out? That's `Action::Back`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the event loop what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Navigation graph:
//!
//! ```text
//!   List ── OpenDetail(i) ──► Detail(i)
//!     ▲                          │
//!     └────────── Back ──────────┘
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the detail screen for the dog at this catalog position.
    OpenDetail(usize),
    /// Return to the list screen.
    Back,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The screen changed; presentation state may need resetting.
    Navigated,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (route={:?})", action, app.route);
    match action {
        Action::OpenDetail(position) => {
            if app.route != Route::List {
                debug!("OpenDetail ignored outside the list screen");
                return Effect::None;
            }
            // Positions come from enumerating the catalog, so this only
            // trips on a programming error upstream.
            let Some(record) = app.catalog.get(position) else {
                warn!(
                    "OpenDetail({}) out of range for catalog of {}",
                    position,
                    app.catalog.len()
                );
                return Effect::None;
            };
            info!("Opening detail for {} (position {})", record.name, position);
            app.route = Route::Detail(position);
            Effect::Navigated
        }
        Action::Back => match app.route {
            Route::List => Effect::None,
            Route::Detail(_) => {
                info!("Back to list");
                app.route = Route::List;
                Effect::Navigated
            }
        },
        Action::Quit => Effect::Quit,
    }
}
