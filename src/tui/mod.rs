//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the explorer core has no terminal
//! dependency.

pub mod keymap;
pub mod terminal_guard;
pub mod view;
