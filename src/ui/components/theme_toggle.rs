//! Theme switching controls.
//!
//! [`ThemeToggle`] is a dropdown listing Light, Dark and System:
//! - Enter expands the menu, j/k or arrows move, Enter picks, Esc cancels
//! - h/l or Left/Right cycle the preference without expanding
//!
//! [`SimpleThemeToggle`] flips between light and dark with a single key.
//! Both apply the new preference to the process-wide theme before reporting it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::theme::{set_theme_preference, theme, theme_preference, ThemeMode, ThemePreference};

/// Action resulting from theme toggle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToggleAction {
    /// The preference was changed and applied.
    Changed(ThemePreference),
}

fn icon(pref: ThemePreference) -> &'static str {
    match pref {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
        ThemePreference::System => "◐",
    }
}

fn apply(pref: ThemePreference) -> ThemeToggleAction {
    set_theme_preference(pref);
    ThemeToggleAction::Changed(pref)
}

/// Dropdown for choosing the theme preference.
#[derive(Debug)]
pub struct ThemeToggle {
    /// Index into [`ThemePreference::ALL`] of the highlighted entry.
    highlighted: usize,
    expanded: bool,
}

impl ThemeToggle {
    /// Create a collapsed toggle.
    pub fn new() -> Self {
        Self {
            highlighted: 0,
            expanded: false,
        }
    }

    /// The preference currently in effect.
    pub fn current(&self) -> ThemePreference {
        theme_preference()
    }

    fn current_index(&self) -> usize {
        let current = self.current();
        ThemePreference::ALL
            .iter()
            .position(|pref| *pref == current)
            .unwrap_or(0)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expand the menu, highlighting the current preference.
    pub fn expand(&mut self) {
        self.expanded = true;
        self.highlighted = self.current_index();
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ThemeToggleAction> {
        if self.expanded {
            self.handle_expanded_input(key)
        } else {
            self.handle_collapsed_input(key)
        }
    }

    fn handle_collapsed_input(&mut self, key: KeyEvent) -> Option<ThemeToggleAction> {
        let count = ThemePreference::ALL.len();
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
                self.expand();
                None
            }
            (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                let current = self.current_index();
                (current > 0).then(|| apply(ThemePreference::ALL[current - 1]))
            }
            (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                let current = self.current_index();
                (current + 1 < count).then(|| apply(ThemePreference::ALL[current + 1]))
            }
            _ => None,
        }
    }

    fn handle_expanded_input(&mut self, key: KeyEvent) -> Option<ThemeToggleAction> {
        let count = ThemePreference::ALL.len();
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.highlighted + 1 < count {
                    self.highlighted += 1;
                }
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.expanded = false;
                Some(apply(ThemePreference::ALL[self.highlighted]))
            }
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.expanded = false;
                None
            }
            _ => None,
        }
    }

    /// Render the collapsed button.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let current = self.current();
        let indicator = if self.expanded { "▲" } else { "▼" };

        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };
        let text_style = if focused {
            Style::default().fg(t.accent)
        } else {
            Style::default().fg(t.fg)
        };

        let block = Block::default()
            .title(" Theme ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let text = format!("{} {} {}", icon(current), current.label(), indicator);
        frame.render_widget(Paragraph::new(text).style(text_style).block(block), area);
    }

    /// Render the expanded menu below the button, as an overlay.
    pub fn render_menu(&self, frame: &mut Frame, button_area: Rect, screen_area: Rect) {
        if !self.expanded {
            return;
        }
        let t = theme();
        let current = self.current();

        let height = (ThemePreference::ALL.len() as u16 + 2)
            .min(screen_area.height.saturating_sub(button_area.y + button_area.height) + 1);
        let menu_area = Rect::new(
            button_area.x,
            button_area.y + button_area.height.saturating_sub(1),
            button_area.width.max(14),
            height,
        )
        .intersection(screen_area);

        frame.render_widget(Clear, menu_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_focused))
            .style(Style::default().bg(t.bg));
        let inner = block.inner(menu_area);
        frame.render_widget(block, menu_area);

        let items: Vec<ListItem> = ThemePreference::ALL
            .iter()
            .map(|pref| {
                let marker = if *pref == current { " ✓" } else { "" };
                let style = if *pref == current {
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(t.fg)
                };
                ListItem::new(Line::from(vec![Span::styled(
                    format!("{} {}{}", icon(*pref), pref.label(), marker),
                    style,
                )]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(t.accent_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.highlighted));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new()
    }
}

/// One-key toggle between the light and dark palettes.
#[derive(Debug, Default)]
pub struct SimpleThemeToggle;

impl SimpleThemeToggle {
    pub fn new() -> Self {
        Self
    }

    /// Switch to the opposite of the currently resolved mode.
    pub fn toggle(&mut self) -> ThemeToggleAction {
        apply(theme().mode.toggled().as_preference())
    }

    /// Enter or Space toggles.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ThemeToggleAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
                Some(self.toggle())
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let (glyph, next) = match t.mode {
            ThemeMode::Light => ("☀", ThemeMode::Dark),
            ThemeMode::Dark => ("☾", ThemeMode::Light),
        };
        let style = if focused {
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.fg)
        };
        let text = format!("[{}] switch to {}", glyph, next.label());
        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}
