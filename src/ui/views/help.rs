//! Scrollable overlay listing every key binding, grouped by context.
//!
//! Opened with '?' and closed with '?', 'q', or Escape.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::events::{get_keybindings_grouped, KeyContext, Keybinding};
use crate::ui::theme::theme;

/// Actions that can be returned from the help view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpAction {
    /// Close the help panel.
    Close,
}

/// The help overlay.
#[derive(Debug)]
pub struct HelpView {
    sections: Vec<(KeyContext, Vec<Keybinding>)>,
    scroll: usize,
    /// Inner height seen by the last render.
    visible_height: usize,
}

impl HelpView {
    pub fn new() -> Self {
        Self {
            sections: get_keybindings_grouped(),
            scroll: 0,
            visible_height: 0,
        }
    }

    /// Number of content lines: per section a header, a blank line, the
    /// bindings and a trailing blank; plus the footer.
    fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, bindings)| bindings.len() + 3)
            .sum::<usize>()
            + 1
    }

    fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_height)
    }

    fn page(&self) -> usize {
        self.visible_height.saturating_sub(2).max(1)
    }

    /// Scroll back to the top.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Handle keyboard input. All keys are consumed while help is open.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('?'), KeyModifiers::NONE)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, _) => return Some(HelpAction::Close),
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.scroll = (self.scroll + self.page()).min(self.max_scroll());
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.scroll = self.scroll.saturating_sub(self.page());
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => self.scroll = 0,
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.scroll = self.max_scroll(),
            _ => {}
        }
        None
    }

    /// Render the overlay over `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent))
            .style(Style::default().bg(t.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(self.build_content_lines()).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, inner);

        if self.total_lines() > self.visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            let track = Rect::new(
                area.x + area.width.saturating_sub(1),
                area.y + 1,
                1,
                area.height.saturating_sub(2),
            );
            frame.render_stateful_widget(scrollbar, track, &mut state);
        }
    }

    fn build_content_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let header = Style::default().fg(t.warning).add_modifier(Modifier::BOLD);
        let key = Style::default().fg(t.success).add_modifier(Modifier::BOLD);

        let mut lines = Vec::with_capacity(self.total_lines());
        for (context, bindings) in &self.sections {
            lines.push(Line::styled(format!("── {} ──", context.display()), header));
            lines.push(Line::default());
            lines.extend(bindings.iter().map(|binding| {
                Line::from(vec![
                    Span::styled(format!("{:>16}", binding.key), key),
                    Span::raw("  "),
                    Span::styled(binding.description, Style::default().fg(t.fg)),
                ])
            }));
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            "Press ?, q, or Esc to close",
            Style::default().fg(t.muted),
        ));
        lines
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}
