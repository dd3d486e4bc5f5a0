//! Reusable UI components.

mod badge;
mod data_table;
mod help_bar;
mod input_field;
mod loading;
mod theme_toggle;

pub use badge::{Badge, BadgeVariant};
pub use data_table::{body_state, DataTable, DataTableAction, TableBody, DEFAULT_EMPTY_TEXT};
pub use help_bar::render_context_help;
pub use input_field::{InputAction, InputField, InputVariant};
pub use loading::{InlineLoader, LoadingIndicator, SpinnerStyle};
pub use theme_toggle::{SimpleThemeToggle, ThemeToggle, ThemeToggleAction};
