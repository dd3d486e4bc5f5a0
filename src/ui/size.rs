//! Size categories shared by the table and the input field.
//!
//! Sizes only affect spacing, never behaviour.

use serde::{Deserialize, Serialize};

/// A presentation size category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Compact spacing.
    Sm,
    /// Regular spacing.
    #[default]
    Md,
    /// Roomy spacing.
    Lg,
}

impl Size {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Sm => "Small",
            Size::Md => "Medium",
            Size::Lg => "Large",
        }
    }

    /// Gap between table columns.
    pub fn column_spacing(&self) -> u16 {
        match self {
            Size::Sm => 1,
            Size::Md => 2,
            Size::Lg => 3,
        }
    }

    /// Height of one table row.
    pub fn row_height(&self) -> u16 {
        match self {
            Size::Sm | Size::Md => 1,
            Size::Lg => 2,
        }
    }

    /// Horizontal padding inside an input border.
    pub fn horizontal_padding(&self) -> u16 {
        match self {
            Size::Sm => 0,
            Size::Md => 1,
            Size::Lg => 2,
        }
    }

    /// Vertical padding inside an input border.
    pub fn vertical_padding(&self) -> u16 {
        match self {
            Size::Sm | Size::Md => 0,
            Size::Lg => 1,
        }
    }

    /// Total height of a bordered input box.
    pub fn input_height(&self) -> u16 {
        3 + 2 * self.vertical_padding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Size::default(), Size::Md);
    }

    #[test]
    fn test_spacing_grows_with_size() {
        assert!(Size::Sm.column_spacing() < Size::Md.column_spacing());
        assert!(Size::Md.column_spacing() < Size::Lg.column_spacing());
        assert_eq!(Size::Sm.input_height(), 3);
        assert_eq!(Size::Lg.input_height(), 5);
    }
}
