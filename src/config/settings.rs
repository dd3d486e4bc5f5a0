//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::events::DEFAULT_TICK_RATE_MS;
use crate::ui::components::{SpinnerStyle, DEFAULT_EMPTY_TEXT};
use crate::ui::size::Size;
use crate::ui::theme::ThemePreference;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The theme preference applied at start-up.
    pub theme: ThemePreference,
    /// Size of the demo page table.
    pub table_size: Size,
    /// Spinner used by loading tables.
    pub spinner: SpinnerStyle,
    /// How long the demo's loading button keeps the table loading.
    pub loading_demo_ms: u64,
    /// Event loop tick interval.
    pub tick_rate_ms: u64,
    /// Placeholder for tables without rows.
    pub empty_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            table_size: Size::Md,
            spinner: SpinnerStyle::Braille,
            loading_demo_ms: 2000,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
        }
    }
}

impl Settings {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.loading_demo_ms == 0 {
            return Err(ConfigError::ValidationError(
                "loading_demo_ms must be greater than zero".to_string(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.theme, ThemePreference::System);
        assert_eq!(settings.tick_rate_ms, 100);
    }

    #[test]
    fn test_zero_durations_rejected() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));

        let settings = Settings {
            loading_demo_ms: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_serializes_lowercase_enums() {
        let settings = Settings {
            theme: ThemePreference::Dark,
            table_size: Size::Sm,
            ..Settings::default()
        };
        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("theme = \"dark\""));
        assert!(toml_str.contains("table_size = \"sm\""));
        assert!(toml_str.contains("spinner = \"braille\""));
    }
}
