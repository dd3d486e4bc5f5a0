//! Small coloured status labels.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{theme, Theme};

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

impl BadgeVariant {
    /// All variants, in display order.
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Default,
        BadgeVariant::Secondary,
        BadgeVariant::Destructive,
        BadgeVariant::Outline,
        BadgeVariant::Success,
        BadgeVariant::Warning,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "Default",
            BadgeVariant::Secondary => "Secondary",
            BadgeVariant::Destructive => "Destructive",
            BadgeVariant::Outline => "Outline",
            BadgeVariant::Success => "Success",
            BadgeVariant::Warning => "Warning",
        }
    }

    /// Style for this variant under the given palette.
    pub fn style(&self, t: &Theme) -> Style {
        let filled = |bg| Style::default().fg(t.accent_fg).bg(bg);
        match self {
            BadgeVariant::Default => filled(t.accent).add_modifier(Modifier::BOLD),
            BadgeVariant::Secondary => Style::default().fg(t.secondary_fg).bg(t.secondary),
            BadgeVariant::Destructive => filled(t.destructive),
            BadgeVariant::Outline => Style::default().fg(t.fg),
            BadgeVariant::Success => filled(t.success),
            BadgeVariant::Warning => filled(t.warning),
        }
    }
}

/// A short label drawn with a variant-specific colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    text: String,
    variant: BadgeVariant,
}

impl Badge {
    /// Create a badge with the default variant.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
        }
    }

    /// Set the variant.
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn current_variant(&self) -> BadgeVariant {
        self.variant
    }

    /// The text as drawn, padding and brackets included.
    pub fn content(&self) -> String {
        match self.variant {
            BadgeVariant::Outline => format!("[ {} ]", self.text),
            _ => format!(" {} ", self.text),
        }
    }

    /// Width in cells.
    pub fn width(&self) -> u16 {
        Span::raw(self.content()).width() as u16
    }

    /// The badge as a styled span, for embedding in lines and table cells.
    pub fn to_span(&self) -> Span<'static> {
        Span::styled(self.content(), self.variant.style(&theme()))
    }

    /// Render the badge at the top-left of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(Line::from(self.to_span())), area);
    }
}

impl From<Badge> for Span<'static> {
    fn from(badge: Badge) -> Self {
        badge.to_span()
    }
}
