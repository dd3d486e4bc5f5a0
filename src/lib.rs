//! componentkit - themeable terminal UI components.
//!
//! The heart of the crate is [`table`], a terminal-independent sort and
//! selection core, and [`ui::DataTable`], the component that renders it.
//! Alongside are an input field, badges and a theme toggle, a demo page and
//! a browsable catalog of component stories.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod stories;
pub mod table;
pub mod tui;
pub mod ui;

pub use app::{App, AppState};
pub use error::{AppError, Result};
