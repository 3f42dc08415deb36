//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::catalog::Catalog;
use crate::core::state::App;

/// Creates a test App over the built-in catalog.
pub fn test_app() -> App {
    App::new(Catalog::builtin())
}

/// Flattens a test terminal's buffer into one string, row by row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
