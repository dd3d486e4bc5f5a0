//! Story browser: a searchable list of every story in the catalog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::stories::{Story, StoryCatalog};
use crate::ui::components::{InputAction, InputField};
use crate::ui::theme::theme;

/// Actions that can be returned from the browser.
#[derive(Debug, Clone)]
pub enum BrowserAction {
    /// Open this story.
    Open(Story),
    /// Leave the browser.
    Back,
}

/// The story browser view.
#[derive(Debug)]
pub struct StoryBrowser {
    catalog: StoryCatalog,
    search: InputField,
    /// Ids of the stories matching the search, best first.
    results: Vec<String>,
    selected: usize,
}

impl StoryBrowser {
    pub fn new(catalog: StoryCatalog) -> Self {
        let mut browser = Self {
            catalog,
            search: InputField::new().placeholder("Search stories..."),
            results: Vec::new(),
            selected: 0,
        };
        browser.refresh();
        browser
    }

    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// The current query.
    pub fn query(&self) -> &str {
        self.search.value()
    }

    /// Replace the query and re-run the search.
    pub fn set_query(&mut self, query: &str) {
        self.search.set_value(query);
        self.refresh();
    }

    /// Ids of the matching stories, best first.
    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.results
            .get(self.selected)
            .and_then(|id| self.catalog.get(id))
    }

    fn refresh(&mut self) {
        self.results = self
            .catalog
            .search(self.search.value())
            .into_iter()
            .map(|story| story.id.clone())
            .collect();
        self.selected = 0;
    }

    /// Look up a story by id and remember it as recent.
    pub fn open(&mut self, id: &str) -> Option<Story> {
        let story = self.catalog.get(id)?.clone();
        self.catalog.record_opened(&story.id);
        Some(story)
    }

    fn open_selected(&mut self) -> Option<BrowserAction> {
        let id = self.results.get(self.selected)?.clone();
        self.open(&id).map(BrowserAction::Open)
    }

    /// Handle keyboard input. Printable keys edit the search query.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BrowserAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(BrowserAction::Back),
            (KeyCode::Enter, _) => self.open_selected(),
            (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
                None
            }
            (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            _ => {
                if let Some(InputAction::Changed | InputAction::Cleared) =
                    self.search.handle_input(key)
                {
                    self.refresh();
                }
                None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let [search_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);
        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);

        self.search.render(frame, search_area, true);

        let items: Vec<ListItem> = self
            .results
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .map(|story| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<11}", story.component.label()),
                        Style::default().fg(t.muted),
                    ),
                    Span::styled(story.title.clone(), Style::default().fg(t.fg)),
                ]))
            })
            .collect();

        let title = format!(" Stories ({}) ", self.results.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(t.border)),
            )
            .highlight_style(
                Style::default()
                    .fg(t.accent_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if !self.results.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, list_area, &mut state);

        let detail: Vec<Line> = match self.selected_story() {
            Some(story) => vec![
                Line::styled(
                    story.title.clone(),
                    Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
                ),
                Line::styled(story.id.clone(), Style::default().fg(t.muted)),
                Line::default(),
                Line::styled(story.description, Style::default().fg(t.fg)),
                Line::default(),
                Line::styled(
                    format!("keywords: {}", story.keywords.join(", ")),
                    Style::default().fg(t.muted),
                ),
            ],
            None => vec![Line::styled("No matching stories", Style::default().fg(t.muted))],
        };
        frame.render_widget(
            Paragraph::new(detail)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(t.border)),
                ),
            detail_area,
        );
    }
}

impl Default for StoryBrowser {
    fn default() -> Self {
        Self::new(StoryCatalog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lists_everything_initially() {
        let browser = StoryBrowser::default();
        assert_eq!(browser.results().len(), browser.catalog().stories().len());
        assert_eq!(browser.selected_story().map(|s| s.id.as_str()), Some("badge/default"));
    }

    #[test]
    fn test_typing_filters() {
        let mut browser = StoryBrowser::default();
        for c in "avatar".chars() {
            browser.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(browser.query(), "avatar");
        assert_eq!(browser.results(), ["data-table/custom-rendering".to_string()]);
    }

    #[test]
    fn test_navigation_and_open() {
        let mut browser = StoryBrowser::default();
        browser.set_query("password");
        assert!(browser.results().len() >= 2);

        browser.handle_input(key(KeyCode::Down));
        let expected = browser.results()[1].clone();

        match browser.handle_input(key(KeyCode::Enter)) {
            Some(BrowserAction::Open(story)) => assert_eq!(story.id, expected),
            other => panic!("expected open, got {other:?}"),
        }
        assert_eq!(browser.catalog().recent(), vec![expected.as_str()]);
    }

    #[test]
    fn test_selection_resets_on_new_query() {
        let mut browser = StoryBrowser::default();
        browser.handle_input(key(KeyCode::Down));
        browser.handle_input(key(KeyCode::Down));
        browser.handle_input(key(KeyCode::Char('t')));
        assert_eq!(browser.selected, 0);
    }

    #[test]
    fn test_no_results_opens_nothing() {
        let mut browser = StoryBrowser::default();
        browser.set_query("xyznomatch");
        assert!(browser.selected_story().is_none());
        assert!(browser.handle_input(key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_open_by_id_is_case_insensitive() {
        let mut browser = StoryBrowser::default();
        let story = browser.open("Badge/Outline").unwrap();
        assert_eq!(story.id, "badge/outline");
        assert_eq!(browser.catalog().recent(), vec!["badge/outline"]);
        assert!(browser.open("badge/nope").is_none());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut browser = StoryBrowser::default();
        assert!(matches!(
            browser.handle_input(key(KeyCode::Esc)),
            Some(BrowserAction::Back)
        ));
    }
}
