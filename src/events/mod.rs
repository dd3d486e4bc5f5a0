//! Event handling for the application.
//!
//! This module turns terminal input into application events and describes the
//! key hints shown for each focus context.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::{EventHandler, DEFAULT_TICK_RATE_MS};
pub use keys::{get_context_hints, get_keybindings_grouped, KeyContext, Keybinding};

/// Application events consumed by [`crate::app::App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
    /// Request to exit.
    Quit,
}
