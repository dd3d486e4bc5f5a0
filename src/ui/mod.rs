//! User interface components and views.
//!
//! Components are self-contained widgets with their own key handling;
//! views compose them into screens.

pub mod components;
pub mod size;
pub mod theme;
pub mod views;

pub use components::{
    render_context_help, Badge, BadgeVariant, DataTable, DataTableAction, InputAction,
    InputField, InputVariant, LoadingIndicator, SimpleThemeToggle, SpinnerStyle, ThemeToggle,
    ThemeToggleAction,
};
pub use size::Size;
pub use theme::{
    init_theme, set_theme_preference, theme, theme_preference, Theme, ThemeMode, ThemePreference,
};
pub use views::{
    BrowserAction, DemoAction, DemoView, HelpAction, HelpView, StoryBrowser, StoryContent,
    StoryView,
};
