//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: [`App::update`]
//! is the only place state changes, and [`App::view`] draws the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::config::Settings;
use crate::events::{Event, KeyContext};
use crate::ui::components::render_context_help;
use crate::ui::theme::theme;
use crate::ui::views::{
    BrowserAction, DemoAction, DemoView, HelpAction, HelpView, StoryBrowser, StoryView,
};

/// The current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The demo page.
    #[default]
    Demo,
    /// The story browser.
    Browser,
    /// A single story.
    Story,
    /// The help overlay.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    state: AppState,
    /// Screen shown under the help overlay and restored when it closes.
    previous: AppState,
    should_quit: bool,
    settings: Settings,
    demo: DemoView,
    browser: StoryBrowser,
    story: Option<StoryView>,
    help: HelpView,
}

impl App {
    /// Create an application showing the sample users.
    pub fn new(settings: Settings) -> Self {
        let demo = DemoView::new(&settings);
        Self::with_demo(settings, demo)
    }

    /// Create an application whose demo table shows `records`.
    pub fn with_records(settings: Settings, records: Vec<Value>) -> Self {
        let demo = DemoView::with_records(&settings, records);
        Self::with_demo(settings, demo)
    }

    fn with_demo(settings: Settings, demo: DemoView) -> Self {
        debug!("Creating new application instance");
        Self {
            state: AppState::Demo,
            previous: AppState::Demo,
            should_quit: false,
            settings,
            demo,
            browser: StoryBrowser::default(),
            story: None,
            help: HelpView::new(),
        }
    }

    /// Open the story with `id`. Returns false if there is none.
    pub fn open_story(&mut self, id: &str) -> bool {
        match self.browser.open(id) {
            Some(story) => {
                info!(story = %story.id, "Opening story");
                self.story = Some(story.build());
                self.state = AppState::Story;
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn demo(&self) -> &DemoView {
        &self.demo
    }

    pub fn browser(&self) -> &StoryBrowser {
        &self.browser
    }

    pub fn story(&self) -> Option<&StoryView> {
        self.story.as_ref()
    }

    /// What key input currently drives.
    pub fn key_context(&self) -> KeyContext {
        match self.state {
            AppState::Demo => self.demo.key_context(),
            AppState::Browser => KeyContext::Browser,
            AppState::Story => self
                .story
                .as_ref()
                .map_or(KeyContext::Story, StoryView::key_context),
            AppState::Help => KeyContext::Help,
            AppState::Exiting => KeyContext::Global,
        }
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.quit();
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(),
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Ctrl+C always quits
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        if self.state == AppState::Help {
            if let Some(HelpAction::Close) = self.help.handle_input(key_event) {
                self.state = self.previous;
            }
            return;
        }

        // An open theme menu takes every key
        if self.state == AppState::Demo && self.demo.is_modal() {
            self.handle_demo_action(key_event);
            return;
        }

        if !self.key_context().captures_text() && key_event.modifiers == KeyModifiers::NONE {
            match key_event.code {
                KeyCode::Char('?') => {
                    self.previous = self.state;
                    self.help.reset_scroll();
                    self.state = AppState::Help;
                    return;
                }
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char('b') if self.state == AppState::Demo => {
                    debug!("Opening story browser");
                    self.state = AppState::Browser;
                    return;
                }
                _ => {}
            }
        }

        match self.state {
            AppState::Demo => self.handle_demo_action(key_event),
            AppState::Browser => match self.browser.handle_input(key_event) {
                Some(BrowserAction::Open(story)) => {
                    info!(story = %story.id, "Opening story");
                    self.story = Some(story.build());
                    self.state = AppState::Story;
                }
                Some(BrowserAction::Back) => self.state = AppState::Demo,
                None => {}
            },
            AppState::Story => {
                if key_event.code == KeyCode::Esc {
                    debug!("Back to story browser");
                    self.story = None;
                    self.state = AppState::Browser;
                } else if let Some(story) = self.story.as_mut() {
                    story.handle_input(key_event);
                }
            }
            AppState::Help | AppState::Exiting => {}
        }
    }

    fn handle_demo_action(&mut self, key_event: KeyEvent) {
        match self.demo.handle_input(key_event) {
            Some(DemoAction::ThemeChanged(preference)) => {
                info!(preference = preference.id(), "Theme preference changed");
            }
            Some(DemoAction::LoadingStarted) => {}
            Some(DemoAction::SelectionChanged(count)) => {
                debug!(count, "Demo selection changed");
            }
            None => {}
        }
    }

    /// Advance spinners and timers.
    fn handle_tick(&mut self) {
        self.demo.tick();
        if let Some(story) = self.story.as_mut() {
            story.tick();
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let t = theme();
        frame.render_widget(
            Paragraph::new("").style(Style::default().fg(t.fg).bg(t.bg)),
            area,
        );

        let [content, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let screen = if self.state == AppState::Help {
            self.previous
        } else {
            self.state
        };
        self.render_screen(frame, content, screen);

        if self.state == AppState::Help {
            self.help.render(frame, centered_rect(70, 80, content));
        }

        render_context_help(frame, footer, self.key_context());
    }

    fn render_screen(&self, frame: &mut Frame, area: Rect, screen: AppState) {
        match screen {
            AppState::Demo | AppState::Help => self.demo.render(frame, area),
            AppState::Browser => self.browser.render(frame, area),
            AppState::Story => match &self.story {
                Some(story) => story.render(frame, area),
                None => self.browser.render(frame, area),
            },
            AppState::Exiting => {
                let goodbye = Paragraph::new(Line::styled(
                    "Goodbye!",
                    Style::default().fg(theme().success),
                ))
                .alignment(Alignment::Center);
                frame.render_widget(goodbye, area);
            }
        }
    }
}

/// A rectangle of the given percentage size centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::{DemoFocus, StoryContent};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.state(), AppState::Demo);
        assert!(!app.should_quit());
        assert_eq!(app.key_context(), KeyContext::ThemeToggle);
    }

    #[test]
    fn test_quit_on_q_key() {
        let mut app = App::default();
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert_eq!(app.state(), AppState::Exiting);
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = App::default();
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_event() {
        let mut app = App::default();
        app.update(Event::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_types_into_focused_input() {
        let mut app = App::default();
        app.update(key(KeyCode::Tab));
        assert_eq!(app.demo().focused(), DemoFocus::Input(0));

        type_text(&mut app, "q?b");
        assert!(!app.should_quit());
        assert_eq!(app.state(), AppState::Demo);
        assert_eq!(app.demo().inputs()[0].value(), "q?b");
    }

    #[test]
    fn test_help_opens_and_restores_previous_screen() {
        let mut app = App::default();
        app.update(key(KeyCode::Char('b')));
        assert_eq!(app.state(), AppState::Browser);

        // The browser search captures text, so '?' is a query character.
        app.update(key(KeyCode::Char('?')));
        assert_eq!(app.state(), AppState::Browser);
        app.update(key(KeyCode::Esc));
        assert_eq!(app.state(), AppState::Demo);

        app.update(key(KeyCode::Char('?')));
        assert_eq!(app.state(), AppState::Help);
        assert_eq!(app.key_context(), KeyContext::Help);

        // 'q' closes help instead of quitting
        app.update(key(KeyCode::Char('q')));
        assert_eq!(app.state(), AppState::Demo);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_browse_open_story_and_back() {
        let mut app = App::default();
        app.update(key(KeyCode::Char('b')));
        type_text(&mut app, "with selection");
        app.update(key(KeyCode::Enter));

        assert_eq!(app.state(), AppState::Story);
        let story = app.story().unwrap();
        assert_eq!(story.id(), "data-table/with-selection");
        assert_eq!(app.key_context(), KeyContext::Table);

        app.update(key(KeyCode::Char(' ')));
        assert!(app
            .story()
            .unwrap()
            .actions()
            .entries()
            .iter()
            .any(|entry| entry.starts_with("onRowSelect")));

        app.update(key(KeyCode::Esc));
        assert_eq!(app.state(), AppState::Browser);
        assert!(app.story().is_none());
    }

    #[test]
    fn test_open_story_by_id() {
        let mut app = App::default();
        assert!(app.open_story("input-field/password"));
        assert_eq!(app.state(), AppState::Story);
        assert!(matches!(
            app.story().unwrap().content(),
            StoryContent::Input(_)
        ));
        assert!(!app.open_story("input-field/missing"));
    }

    #[test]
    fn test_tick_expires_loading_demo() {
        let settings = Settings {
            loading_demo_ms: 1,
            ..Settings::default()
        };
        let mut app = App::new(settings);
        app.update(Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        app.update(Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert_eq!(app.demo().focused(), DemoFocus::LoadingButton);

        app.update(key(KeyCode::Enter));
        assert!(app.demo().table().is_loading());

        std::thread::sleep(std::time::Duration::from_millis(5));
        app.update(Event::Tick);
        assert!(!app.demo().table().is_loading());
    }

    #[test]
    fn test_resize_event_changes_nothing() {
        let mut app = App::default();
        app.update(Event::Resize(80, 24));
        assert_eq!(app.state(), AppState::Demo);
    }

    #[test]
    fn test_view_renders_every_screen() {
        let mut app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();

        terminal.draw(|f| app.view(f)).unwrap();
        app.update(key(KeyCode::Char('?')));
        terminal.draw(|f| app.view(f)).unwrap();
        app.update(key(KeyCode::Esc));
        app.update(key(KeyCode::Char('b')));
        terminal.draw(|f| app.view(f)).unwrap();
        app.update(key(KeyCode::Enter));
        terminal.draw(|f| app.view(f)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Actions"));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 25);
        assert_eq!(rect.x, 25);
    }
}
