//! Text input field component.
//!
//! This module provides a labelled single-line input with support for:
//! - Character input and deletion
//! - Cursor movement (left/right, home/end)
//! - Three visual variants and three sizes
//! - Helper text and error messages
//! - A loading spinner, which also makes the field read-only
//! - A clear action and password masking with a visibility toggle
//!
//! The cursor counts characters, not bytes, so multi-byte input is safe.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::loading::InlineLoader;
use crate::ui::size::Size;
use crate::ui::theme::theme;

/// Visual variant of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Tinted background, border only when focused.
    Filled,
    /// Bordered box.
    #[default]
    Outlined,
    /// No border or fill.
    Ghost,
}

impl InputVariant {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            InputVariant::Filled => "Filled",
            InputVariant::Outlined => "Outlined",
            InputVariant::Ghost => "Ghost",
        }
    }
}

/// Action resulting from input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The value was edited.
    Changed,
    /// The value was emptied through the clear action.
    Cleared,
    /// The password visibility was toggled.
    VisibilityToggled,
}

/// A themeable text input field.
#[derive(Debug, Clone)]
pub struct InputField {
    /// The current input value.
    value: String,
    /// Cursor position, in characters.
    cursor: usize,
    /// Label shown above the field.
    label: Option<String>,
    /// Placeholder text shown when empty.
    placeholder: String,
    /// Helper text shown below the field.
    helper_text: Option<String>,
    /// Error message shown below the field; implies invalid.
    error_message: Option<String>,
    /// Explicit invalid flag.
    invalid: bool,
    variant: InputVariant,
    size: Size,
    disabled: bool,
    /// Spinner, active while loading.
    loader: InlineLoader,
    /// Whether the clear action is offered.
    show_clear_button: bool,
    /// Whether the value is a password.
    password: bool,
    /// Whether the password is shown in clear text.
    password_visible: bool,
}

impl InputField {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            invalid: false,
            variant: InputVariant::default(),
            size: Size::default(),
            disabled: false,
            loader: InlineLoader::new(),
            show_clear_button: false,
            password: false,
            password_visible: false,
        }
    }

    /// Create a new field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_value(value);
        field
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Mark the field invalid.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size category.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Disable editing.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show the loading spinner.
    pub fn loading(mut self, loading: bool) -> Self {
        self.set_loading(loading);
        self
    }

    /// Offer the clear action.
    pub fn clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Treat the value as a password.
    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move cursor to end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Replace or remove the error message.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Start or stop the loading spinner.
    pub fn set_loading(&mut self, loading: bool) {
        self.loader.set_active(loading);
    }

    /// Enable or disable editing.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The label, if any.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The visual variant.
    pub fn current_variant(&self) -> InputVariant {
        self.variant
    }

    /// The size category.
    pub fn current_size(&self) -> Size {
        self.size
    }

    /// Invalid when flagged or when an error message is present.
    pub fn is_invalid(&self) -> bool {
        self.invalid || self.error_message.is_some()
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the spinner is shown.
    pub fn is_loading(&self) -> bool {
        self.loader.is_active()
    }

    /// Whether the value can be edited right now.
    pub fn is_editable(&self) -> bool {
        !self.disabled && !self.is_loading()
    }

    /// Whether the password is shown in clear text.
    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Whether the clear action is currently available.
    pub fn can_clear(&self) -> bool {
        self.show_clear_button && !self.is_loading() && !self.value.is_empty()
    }

    /// Text shown below the field: the error message, else the helper text.
    pub fn description(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.helper_text.as_deref())
    }

    /// Get the display value (masked for hidden passwords).
    pub fn display_value(&self) -> String {
        if self.password && !self.password_visible {
            "•".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }

    /// Total height needed by [`render`](Self::render).
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let description = u16::from(self.description().is_some());
        label + self.size.input_height() + description
    }

    /// Clear the value if the clear action is available.
    ///
    /// Returns true if the value was cleared.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        true
    }

    /// Show or hide the password. Not available while loading.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if !self.password || self.is_loading() {
            return false;
        }
        self.password_visible = !self.password_visible;
        true
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        self.loader.tick();
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<InputAction> {
        match (key.code, key.modifiers) {
            // Ctrl+X - the clear button
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
                self.clear().then_some(InputAction::Cleared)
            }
            // Ctrl+T - show/hide password
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => self
                .toggle_password_visibility()
                .then_some(InputAction::VisibilityToggled),
            _ if !self.is_editable() => None,
            _ => self.handle_edit(key),
        }
    }

    fn handle_edit(&mut self, key: KeyEvent) -> Option<InputAction> {
        let len = self.char_count();
        let changed = match (key.code, key.modifiers) {
            // Character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                true
            }
            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if self.cursor < len {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < len {
                    self.cursor += 1;
                }
                false
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = len;
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if !self.value.is_empty() {
                    self.value.clear();
                    self.cursor = 0;
                    true
                } else {
                    false
                }
            }
            // Ctrl+W - delete trailing separators, then the word before them
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                let chars: Vec<char> = self.value.chars().collect();
                let mut word_start = self.cursor;
                while word_start > 0 && !chars[word_start - 1].is_alphanumeric() {
                    word_start -= 1;
                }
                while word_start > 0 && chars[word_start - 1].is_alphanumeric() {
                    word_start -= 1;
                }
                if word_start < self.cursor {
                    let from = self.byte_index(word_start);
                    let to = self.byte_index(self.cursor);
                    self.value.replace_range(from..to, "");
                    self.cursor = word_start;
                    true
                } else {
                    false
                }
            }
            _ => false,
        };

        changed.then_some(InputAction::Changed)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the character at `char_index`.
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor position.
    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Spans drawn at the right edge of the box.
    fn adornments(&self) -> Vec<Span<'static>> {
        let t = theme();
        let mut spans = Vec::new();

        if self.is_loading() {
            spans.push(Span::styled(
                self.loader.frame(),
                Style::default().fg(t.muted),
            ));
            return spans;
        }

        if self.can_clear() {
            spans.push(Span::styled("✕", Style::default().fg(t.muted)));
        }

        if self.password {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            let label = if self.password_visible { "hide" } else { "show" };
            spans.push(Span::styled(label, Style::default().fg(t.muted)));
        }

        spans
    }

    fn box_block(&self, focused: bool) -> Block<'static> {
        let t = theme();
        let h = self.size.horizontal_padding();
        let v = self.size.vertical_padding();

        let border_color = if self.is_invalid() {
            t.error
        } else if focused {
            t.border_focused
        } else {
            t.border
        };

        match self.variant {
            InputVariant::Outlined => Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::new(h, h, v, v)),
            InputVariant::Filled => {
                // The border blends into the fill until focused or invalid
                let border_color = if focused || self.is_invalid() {
                    border_color
                } else {
                    t.input_filled_bg
                };
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(t.input_filled_bg))
                    .padding(Padding::new(h, h, v, v))
            }
            InputVariant::Ghost => {
                let block = Block::default().padding(Padding::new(h + 1, h + 1, v + 1, v + 1));
                if focused {
                    block.style(Style::default().bg(t.row_cursor))
                } else {
                    block
                }
            }
        }
    }

    /// Render the field: label, box, and description line.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to
    /// * `area` - The area to render in
    /// * `focused` - Whether this input is currently focused
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let focused = focused && !self.disabled;

        let mut constraints = Vec::with_capacity(3);
        if self.label.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(self.size.input_height()));
        if self.description().is_some() {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut chunk_iter = chunks.iter().copied();

        if let Some(label) = &self.label {
            let label_area = chunk_iter.next().unwrap_or_default();
            let style = if self.disabled {
                Style::default().fg(t.muted)
            } else if focused {
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.fg)
            };
            frame.render_widget(Paragraph::new(Span::styled(label.clone(), style)), label_area);
        }

        let box_area = chunk_iter.next().unwrap_or_default();
        let block = self.box_block(focused);
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let adornments = self.adornments();
        let adornment_width: u16 = adornments.iter().map(|s| s.width() as u16).sum();
        let [text_area, adornment_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(adornment_width),
        ])
        .areas(inner);

        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let (display, style) = if showing_placeholder {
            (
                self.placeholder.clone(),
                Style::default().fg(t.input_placeholder),
            )
        } else {
            (self.display_value(), Style::default().fg(t.input_fg))
        };
        let style = if self.disabled {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        };

        // Keep the cursor visible by scrolling long values
        let visible = text_area.width.max(1) as usize;
        let offset = if showing_placeholder {
            0
        } else {
            self.cursor.saturating_sub(visible - 1)
        };
        let shown: String = display.chars().skip(offset).take(visible).collect();
        frame.render_widget(Paragraph::new(shown).style(style), text_area);

        if !adornments.is_empty() {
            frame.render_widget(Paragraph::new(Line::from(adornments)), adornment_area);
        }

        if let Some(description) = self.description() {
            let description_area = chunk_iter.next().unwrap_or_default();
            let color = if self.is_invalid() { t.error } else { t.muted };
            frame.render_widget(
                Paragraph::new(Span::styled(description.to_string(), Style::default().fg(color))),
                description_area,
            );
        }

        if focused && self.is_editable() {
            let cursor_x = text_area.x + (self.cursor - offset) as u16;
            if cursor_x < text_area.x + text_area.width {
                frame.set_cursor_position(Position::new(cursor_x, text_area.y));
            }
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}
