//! # Core Application Logic
//!
//! The catalog, the navigator, and the pure presentation decisions.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (dog list)   │
//!                    │  • State (route)        │
//!                    │  • Action (navigation)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Record` and the read-only `Catalog`
//! - [`state`]: The `App` struct and the `Route` it is on
//! - [`action`]: The `Action` enum and `update()`
//! - [`presentation`]: Row layout parity, description text
//! - [`config`]: `~/.pati/config.toml` loading and resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod presentation;
pub mod state;
