//! Theme and styling configuration.
//!
//! The active theme is process-wide: renderers call [`theme()`] to read the
//! current palette, and the theme toggle changes it with
//! [`set_theme_preference`].

use std::sync::{OnceLock, RwLock};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The user's theme choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the terminal's background.
    #[default]
    System,
}

impl ThemePreference {
    /// All preferences in menu order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }

    /// Stable identifier, matching the settings file.
    pub fn id(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse an identifier produced by [`ThemePreference::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.id() == id)
    }

    /// Resolve to a concrete mode.
    pub fn resolve(&self) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => detect_system_mode(),
        }
    }
}

/// A resolved light or dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Lowercase label, e.g. for "dark theme".
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The explicit preference selecting this mode.
    pub fn as_preference(&self) -> ThemePreference {
        match self {
            ThemeMode::Light => ThemePreference::Light,
            ThemeMode::Dark => ThemePreference::Dark,
        }
    }
}

/// Detect the terminal background from `COLORFGBG`, defaulting to dark.
pub fn detect_system_mode() -> ThemeMode {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| mode_from_colorfgbg(&value))
        .unwrap_or(ThemeMode::Dark)
}

/// Interpret a `COLORFGBG` value such as `"15;0"` (fg;bg).
///
/// Background indices 7 and 15 are light; anything else parsable is dark.
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    if bg == 7 || bg == 15 {
        Some(ThemeMode::Light)
    } else {
        Some(ThemeMode::Dark)
    }
}

/// Color palette for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// The mode this palette belongs to.
    pub mode: ThemeMode,
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Secondary text (hints, helper text, placeholders).
    pub muted: Color,
    /// Accent used for focus and primary badges.
    pub accent: Color,
    /// Text drawn on top of the accent color.
    pub accent_fg: Color,
    /// Unfocused border.
    pub border: Color,
    /// Focused border.
    pub border_focused: Color,
    /// Input text.
    pub input_fg: Color,
    /// Input placeholder text.
    pub input_placeholder: Color,
    /// Fill for the filled input variant.
    pub input_filled_bg: Color,
    /// Errors and invalid fields.
    pub error: Color,
    /// Success badges.
    pub success: Color,
    /// Warning badges.
    pub warning: Color,
    /// Destructive badges.
    pub destructive: Color,
    /// Secondary badge fill.
    pub secondary: Color,
    /// Text drawn on the secondary fill.
    pub secondary_fg: Color,
    /// Table header text.
    pub table_header: Color,
    /// Background of selected rows.
    pub row_selected: Color,
    /// Background of the row under the cursor.
    pub row_cursor: Color,
}

impl Theme {
    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            fg: Color::White,
            bg: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            accent_fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Yellow,
            input_fg: Color::White,
            input_placeholder: Color::DarkGray,
            input_filled_bg: Color::Rgb(38, 38, 38),
            error: Color::LightRed,
            success: Color::Green,
            warning: Color::Yellow,
            destructive: Color::Red,
            secondary: Color::Rgb(64, 64, 64),
            secondary_fg: Color::White,
            table_header: Color::Gray,
            row_selected: Color::Rgb(20, 50, 60),
            row_cursor: Color::Rgb(50, 50, 50),
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            fg: Color::Black,
            bg: Color::White,
            muted: Color::Gray,
            accent: Color::Blue,
            accent_fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Blue,
            input_fg: Color::Black,
            input_placeholder: Color::Gray,
            input_filled_bg: Color::Rgb(235, 235, 235),
            error: Color::Red,
            success: Color::Green,
            warning: Color::Rgb(202, 138, 4),
            destructive: Color::Red,
            secondary: Color::Rgb(226, 232, 240),
            secondary_fg: Color::Black,
            table_header: Color::DarkGray,
            row_selected: Color::Rgb(219, 234, 254),
            row_cursor: Color::Rgb(241, 245, 249),
        }
    }

    /// The palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTheme {
    preference: ThemePreference,
    theme: Theme,
}

static ACTIVE_THEME: OnceLock<RwLock<ActiveTheme>> = OnceLock::new();

fn active() -> &'static RwLock<ActiveTheme> {
    ACTIVE_THEME.get_or_init(|| {
        RwLock::new(ActiveTheme {
            preference: ThemePreference::System,
            theme: Theme::for_mode(ThemePreference::System.resolve()),
        })
    })
}

/// Install the initial theme preference.
pub fn init_theme(preference: ThemePreference) -> Theme {
    set_theme_preference(preference);
    theme()
}

/// Change the active theme preference, returning the resolved mode.
pub fn set_theme_preference(preference: ThemePreference) -> ThemeMode {
    let mode = preference.resolve();
    let mut guard = active().write().unwrap_or_else(|e| e.into_inner());
    guard.preference = preference;
    guard.theme = Theme::for_mode(mode);
    debug!(preference = preference.id(), mode = mode.label(), "Theme changed");
    mode
}

/// The current preference.
pub fn theme_preference() -> ThemePreference {
    active().read().unwrap_or_else(|e| e.into_inner()).preference
}

/// The current palette.
pub fn theme() -> Theme {
    active().read().unwrap_or_else(|e| e.into_inner()).theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mode_from_colorfgbg() {
        assert_eq!(mode_from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(mode_from_colorfgbg("0;7"), Some(ThemeMode::Light));
        assert_eq!(mode_from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(mode_from_colorfgbg("15;default;0"), Some(ThemeMode::Dark));
        assert_eq!(mode_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_explicit_preferences_resolve() {
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
    }

    #[test]
    #[serial]
    fn test_system_preference_reads_environment() {
        std::env::set_var("COLORFGBG", "0;15");
        assert_eq!(ThemePreference::System.resolve(), ThemeMode::Light);
        std::env::remove_var("COLORFGBG");
        assert_eq!(ThemePreference::System.resolve(), ThemeMode::Dark);
    }

    #[test]
    fn test_preference_ids_round_trip() {
        for pref in ThemePreference::ALL {
            assert_eq!(ThemePreference::from_id(pref.id()), Some(pref));
        }
        assert_eq!(ThemePreference::from_id("neon"), None);
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.as_preference(), ThemePreference::Light);
    }

    #[test]
    #[serial]
    fn test_set_theme_preference_updates_palette() {
        set_theme_preference(ThemePreference::Light);
        assert_eq!(theme_preference(), ThemePreference::Light);
        assert_eq!(theme(), Theme::light());

        let mode = set_theme_preference(ThemePreference::Dark);
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(theme().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::light().fg, Theme::dark().fg);
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
    }
}
