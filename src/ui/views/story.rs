//! A single live story: one configured component plus an action log.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::events::KeyContext;
use crate::stories::SampleUser;
use crate::table::SortDirection;
use crate::ui::components::{Badge, DataTable, DataTableAction, InputAction, InputField};
use crate::ui::theme::theme;

/// Entries kept in the action log.
const MAX_ACTIONS: usize = 5;

/// Shared, bounded log of callbacks fired by a story's component.
///
/// Cloning shares the log, so an observer closure can write to it.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Rc<RefCell<VecDeque<String>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest past the limit.
    pub fn push(&self, entry: impl Into<String>) {
        let mut entries = self.entries.borrow_mut();
        entries.push_back(entry.into());
        while entries.len() > MAX_ACTIONS {
            entries.pop_front();
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// One row of badges, optionally prefixed with a label.
#[derive(Debug, Clone)]
pub struct BadgeRow {
    pub label: Option<String>,
    pub badges: Vec<Badge>,
}

impl BadgeRow {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self {
            label: None,
            badges,
        }
    }

    pub fn labelled(label: impl Into<String>, badge: Badge) -> Self {
        Self {
            label: Some(label.into()),
            badges: vec![badge],
        }
    }

    fn to_line(&self) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        if let Some(label) = &self.label {
            spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            ));
        }
        for (i, badge) in self.badges.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(badge.to_span());
        }
        Line::from(spans)
    }
}

/// The component a story shows.
#[derive(Debug)]
pub enum StoryContent {
    Badges(Vec<BadgeRow>),
    Table(DataTable<SampleUser>),
    Input(InputField),
}

/// A story opened from the catalog.
#[derive(Debug)]
pub struct StoryView {
    id: String,
    title: String,
    description: String,
    content: StoryContent,
    actions: ActionLog,
}

impl StoryView {
    /// Wrap built content. `actions` may already be shared with the content.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: StoryContent,
        actions: ActionLog,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            content,
            actions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &StoryContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut StoryContent {
        &mut self.content
    }

    pub fn actions(&self) -> &ActionLog {
        &self.actions
    }

    /// What key input currently drives.
    pub fn key_context(&self) -> KeyContext {
        match self.content {
            StoryContent::Badges(_) => KeyContext::Story,
            StoryContent::Table(_) => KeyContext::Table,
            StoryContent::Input(_) => KeyContext::Input,
        }
    }

    /// Forward a key to the component and log what it reports.
    pub fn handle_input(&mut self, key: KeyEvent) {
        match &mut self.content {
            StoryContent::Badges(_) => {}
            StoryContent::Table(table) => {
                if let Some(DataTableAction::SortChanged(sort)) = table.handle_input(key) {
                    let entry = match (sort.key(), sort.direction()) {
                        (Some(column), SortDirection::Ascending) => format!("sort: {column} ↑"),
                        (Some(column), SortDirection::Descending) => format!("sort: {column} ↓"),
                        _ => "sort: cleared".to_string(),
                    };
                    self.actions.push(entry);
                }
            }
            StoryContent::Input(input) => match input.handle_input(key) {
                Some(InputAction::Changed) => {
                    self.actions.push(format!("onChange: {:?}", input.display_value()))
                }
                Some(InputAction::Cleared) => self.actions.push("onClear"),
                Some(InputAction::VisibilityToggled) => self.actions.push(format!(
                    "password {}",
                    if input.is_password_visible() { "shown" } else { "hidden" }
                )),
                None => {}
            },
        }
    }

    /// Advance spinners and timers.
    pub fn tick(&mut self) {
        match &mut self.content {
            StoryContent::Badges(_) => {}
            StoryContent::Table(table) => {
                table.tick();
            }
            StoryContent::Input(input) => input.tick(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let [header_area, body_area, actions_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(MAX_ACTIONS as u16 + 2),
        ])
        .areas(area);

        let header = vec![
            Line::from(vec![
                Span::styled(
                    self.title.clone(),
                    Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", self.id), Style::default().fg(t.muted)),
            ]),
            Line::styled(self.description.clone(), Style::default().fg(t.muted)),
        ];
        frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), header_area);

        match &self.content {
            StoryContent::Badges(rows) => {
                let lines: Vec<Line> = rows
                    .iter()
                    .flat_map(|row| [row.to_line(), Line::default()])
                    .collect();
                frame.render_widget(Paragraph::new(lines), body_area);
            }
            StoryContent::Table(table) => table.render(frame, body_area, true),
            StoryContent::Input(input) => {
                let width = body_area.width.min(60);
                let height = input.height().min(body_area.height);
                input.render(
                    frame,
                    Rect::new(body_area.x, body_area.y, width, height),
                    true,
                );
            }
        }

        let entries: Vec<Line> = self
            .actions
            .entries()
            .into_iter()
            .map(|entry| Line::styled(entry, Style::default().fg(t.fg)))
            .collect();
        let block = Block::default()
            .title(" Actions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        frame.render_widget(Paragraph::new(entries).block(block), actions_area);
    }
}
