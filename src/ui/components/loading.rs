//! Spinners for components in their loading state.
//!
//! [`LoadingIndicator`] fills a table body while data is on its way and can
//! stop itself at a deadline. [`InlineLoader`] is the one-cell variant an
//! input field shows at its right edge.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use serde::{Deserialize, Serialize};

use crate::ui::theme::theme;

const BRAILLE: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ASCII: &[&str] = &["|", "/", "-", "\\"];
const DOTS: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Animation used by a spinner. Configurable through `settings.spinner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerStyle {
    #[default]
    Braille,
    /// Plain ASCII, for terminals without braille glyphs.
    Simple,
    Dots,
}

impl SpinnerStyle {
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Braille => BRAILLE,
            SpinnerStyle::Simple => ASCII,
            SpinnerStyle::Dots => DOTS,
        }
    }
}

/// Frame counter shared by both loaders.
#[derive(Debug, Clone, Copy, Default)]
struct Spinner {
    style: SpinnerStyle,
    frame: usize,
}

impl Spinner {
    fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.style.frames().len();
    }

    fn reset(&mut self) {
        self.frame = 0;
    }

    fn glyph(&self) -> &'static str {
        let frames = self.style.frames();
        frames[self.frame % frames.len()]
    }
}

/// The table body's "Loading..." line.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    spinner: Spinner,
    active: bool,
    /// The first tick at or after this instant stops the indicator.
    deadline: Option<Instant>,
}

impl LoadingIndicator {
    pub const LABEL: &'static str = "Loading...";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: SpinnerStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn set_style(&mut self, style: SpinnerStyle) {
        self.spinner = Spinner { style, frame: 0 };
    }

    /// Start with no deadline, dropping any previous one.
    pub fn start(&mut self) {
        self.active = true;
        self.spinner.reset();
        self.deadline = None;
    }

    /// Start and stop automatically once `duration` has passed.
    pub fn start_for(&mut self, duration: Duration) {
        self.start_until(Instant::now() + duration);
    }

    pub fn start_until(&mut self, deadline: Instant) {
        self.start();
        self.deadline = Some(deadline);
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the animation. Returns true when this tick hit the deadline
    /// and stopped the indicator.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.stop();
                true
            }
            _ => {
                self.spinner.advance();
                false
            }
        }
    }

    /// Spinner glyph followed by the label, or nothing when idle.
    pub fn text(&self) -> String {
        if self.active {
            format!("{} {}", self.spinner.glyph(), Self::LABEL)
        } else {
            String::new()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.active {
            return;
        }
        let line = Paragraph::new(self.text())
            .style(Style::default().fg(theme().accent))
            .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }
}

/// Single-glyph spinner for an input field's trailing edge.
#[derive(Debug, Clone, Default)]
pub struct InlineLoader {
    spinner: Spinner,
    active: bool,
}

impl InlineLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.spinner.reset();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tick(&mut self) {
        if self.active {
            self.spinner.advance();
        }
    }

    /// Current glyph; a blank cell while idle so the layout does not shift.
    pub fn frame(&self) -> &'static str {
        if self.active {
            self.spinner.glyph()
        } else {
            " "
        }
    }
}
