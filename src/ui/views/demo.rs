//! The demo page: every component on one screen.
//!
//! The page has two sections. The inputs section shows the input field in
//! each variant, state and size; the table section shows a selectable table
//! with a loading demo button and the current selection. Tab moves focus
//! through the theme toggle, the editable inputs, the button and the table,
//! and the visible section follows focus.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Settings;
use crate::data::infer_columns;
use crate::events::KeyContext;
use crate::stories::{demo_columns, demo_records};
use crate::ui::components::{
    Badge, BadgeVariant, DataTable, DataTableAction, InputAction, InputField, InputVariant,
    ThemeToggle, ThemeToggleAction,
};
use crate::ui::size::Size;
use crate::ui::theme::{theme, ThemeMode, ThemePreference};

/// Width of the theme toggle button.
const TOGGLE_WIDTH: u16 = 18;

/// Label of the loading demo button.
const LOADING_BUTTON_LABEL: &str = "Toggle Loading Demo";

/// Inputs in the left column of the inputs section.
const BASIC_INPUTS: std::ops::Range<usize> = 0..3;
/// Inputs in the right column.
const STATE_INPUTS: std::ops::Range<usize> = 3..7;
/// Inputs in the sizes row.
const SIZE_INPUTS: std::ops::Range<usize> = 7..10;

/// Something on the page that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoFocus {
    ThemeToggle,
    /// An input, by index.
    Input(usize),
    LoadingButton,
    Table,
}

/// The part of the page shown below the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSection {
    Inputs,
    Table,
}

impl DemoSection {
    pub fn label(&self) -> &'static str {
        match self {
            DemoSection::Inputs => "InputField",
            DemoSection::Table => "DataTable",
        }
    }
}

/// What happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoAction {
    ThemeChanged(ThemePreference),
    LoadingStarted,
    /// Carries the number of selected users.
    SelectionChanged(usize),
}

/// The demo page.
pub struct DemoView {
    toggle: ThemeToggle,
    inputs: Vec<InputField>,
    table: DataTable<Value>,
    /// Descriptions of the selected records, written by the table observer.
    selected: Rc<RefCell<Vec<String>>>,
    loading_demo: Duration,
    focus_order: Vec<DemoFocus>,
    focus: usize,
    section: DemoSection,
}

impl DemoView {
    /// Build the page over the sample users.
    pub fn new(settings: &Settings) -> Self {
        Self::build(settings, demo_records(), demo_columns())
    }

    /// Build the page over user-supplied records; columns are inferred.
    pub fn with_records(settings: &Settings, records: Vec<Value>) -> Self {
        let columns = infer_columns(&records);
        Self::build(settings, records, columns)
    }

    fn build(
        settings: &Settings,
        records: Vec<Value>,
        columns: Vec<crate::table::Column<Value>>,
    ) -> Self {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);

        let table = DataTable::new(columns)
            .with_data(records)
            .selectable(true)
            .with_size(settings.table_size)
            .with_empty_text(settings.empty_text.clone())
            .with_spinner(settings.spinner)
            .with_observer(move |records: &[&Value]| {
                *sink.borrow_mut() = records.iter().map(|record| describe(record)).collect();
            });

        let inputs = demo_inputs();
        let mut focus_order = vec![DemoFocus::ThemeToggle];
        focus_order.extend(
            inputs
                .iter()
                .enumerate()
                .filter(|(_, input)| input.is_editable())
                .map(|(i, _)| DemoFocus::Input(i)),
        );
        focus_order.push(DemoFocus::LoadingButton);
        focus_order.push(DemoFocus::Table);

        Self {
            toggle: ThemeToggle::new(),
            inputs,
            table,
            selected,
            loading_demo: Duration::from_millis(settings.loading_demo_ms),
            focus_order,
            focus: 0,
            section: DemoSection::Inputs,
        }
    }

    pub fn table(&self) -> &DataTable<Value> {
        &self.table
    }

    pub fn inputs(&self) -> &[InputField] {
        &self.inputs
    }

    pub fn focused(&self) -> DemoFocus {
        self.focus_order[self.focus]
    }

    pub fn section(&self) -> DemoSection {
        self.section
    }

    /// Descriptions of the selected users, in displayed order.
    pub fn selected_users(&self) -> Vec<String> {
        self.selected.borrow().clone()
    }

    /// "2 users selected", or `None` when nothing is selected.
    pub fn selection_summary(&self) -> Option<String> {
        match self.selected.borrow().len() {
            0 => None,
            1 => Some("1 user selected".to_string()),
            n => Some(format!("{n} users selected")),
        }
    }

    /// Whether the open theme menu should receive every key.
    pub fn is_modal(&self) -> bool {
        self.toggle.is_expanded()
    }

    /// What key input currently drives.
    pub fn key_context(&self) -> KeyContext {
        match self.focused() {
            DemoFocus::ThemeToggle => KeyContext::ThemeToggle,
            DemoFocus::Input(_) => KeyContext::Input,
            DemoFocus::LoadingButton => KeyContext::Button,
            DemoFocus::Table => KeyContext::Table,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_order.len();
        self.sync_section();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.focus_order.len() - 1) % self.focus_order.len();
        self.sync_section();
    }

    fn sync_section(&mut self) {
        match self.focused() {
            DemoFocus::Input(_) => self.section = DemoSection::Inputs,
            DemoFocus::LoadingButton | DemoFocus::Table => self.section = DemoSection::Table,
            DemoFocus::ThemeToggle => {}
        }
        debug!(focus = ?self.focused(), "Focus moved");
    }

    /// Put the table in its loading state for the configured duration.
    pub fn start_loading_demo(&mut self) {
        info!(duration_ms = self.loading_demo.as_millis() as u64, "Loading demo started");
        self.table.start_loading_for(self.loading_demo);
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DemoAction> {
        if self.toggle.is_expanded() {
            return self.toggle.handle_input(key).map(theme_changed);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, _) => {
                self.focus_next();
                return None;
            }
            (KeyCode::BackTab, _) => {
                self.focus_prev();
                return None;
            }
            _ => {}
        }

        match self.focused() {
            DemoFocus::ThemeToggle => self.toggle.handle_input(key).map(theme_changed),
            DemoFocus::Input(index) => {
                let input = self.inputs.get_mut(index)?;
                match input.handle_input(key)? {
                    InputAction::Changed => debug!(index, "Demo input changed"),
                    InputAction::Cleared => debug!(index, "Demo input cleared"),
                    InputAction::VisibilityToggled => {
                        debug!(visible = input.is_password_visible(), "Password visibility")
                    }
                }
                None
            }
            DemoFocus::LoadingButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') if key.modifiers == KeyModifiers::NONE => {
                    self.start_loading_demo();
                    Some(DemoAction::LoadingStarted)
                }
                _ => None,
            },
            DemoFocus::Table => match self.table.handle_input(key)? {
                DataTableAction::SelectionChanged(count) => {
                    Some(DemoAction::SelectionChanged(count))
                }
                _ => None,
            },
        }
    }

    /// Advance spinners and expire the loading demo.
    pub fn tick(&mut self) {
        if self.table.tick() {
            debug!("Loading demo finished");
        }
        for input in &mut self.inputs {
            input.tick();
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [header_area, tabs_area, body_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area);
        let [title_area, toggle_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(TOGGLE_WIDTH)])
                .areas(header_area);

        self.render_header(frame, title_area);
        self.toggle
            .render(frame, toggle_area, self.focused() == DemoFocus::ThemeToggle);
        self.render_tabs(frame, tabs_area);

        match self.section {
            DemoSection::Inputs => self.render_inputs(frame, body_area),
            DemoSection::Table => self.render_table_section(frame, body_area),
        }

        self.toggle.render_menu(frame, toggle_area, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mode = match t.mode {
            ThemeMode::Light => "Light theme",
            ThemeMode::Dark => "Dark theme",
        };
        let lines = vec![
            Line::styled(
                "UI Component Library",
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Themeable terminal components built on ratatui",
                Style::default().fg(t.muted),
            ),
            Line::from(Badge::new(mode).variant(BadgeVariant::Outline).to_span()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut spans = Vec::new();
        for section in [DemoSection::Inputs, DemoSection::Table] {
            let style = if section == self.section {
                Style::default()
                    .fg(t.accent_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.muted)
            };
            spans.push(Span::styled(format!(" {} ", section.label()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_inputs(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" InputField Component ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let placements = self.input_placements(inner.width);
        let focused_bottom = match self.focused() {
            DemoFocus::Input(index) => placements
                .iter()
                .find(|p| p.item == Placed::Input(index))
                .map(|p| p.y + p.height)
                .unwrap_or(0),
            _ => 0,
        };
        let offset = focused_bottom.saturating_sub(inner.height);

        for placement in &placements {
            if placement.y < offset || placement.y + placement.height - offset > inner.height {
                continue;
            }
            let rect = Rect::new(
                inner.x + placement.x,
                inner.y + placement.y - offset,
                placement.width,
                placement.height,
            );
            match placement.item {
                Placed::Heading(text) => frame.render_widget(
                    Paragraph::new(Line::styled(
                        text,
                        Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
                    )),
                    rect,
                ),
                Placed::Input(index) => {
                    let focused = self.focused() == DemoFocus::Input(index);
                    self.inputs[index].render(frame, rect, focused);
                }
            }
        }
    }

    /// Positions of headings and inputs relative to the section's inner
    /// area, before scrolling.
    fn input_placements(&self, width: u16) -> Vec<Placement> {
        let mut placements = Vec::new();
        let half = width / 2;
        let columns = [(0, half.saturating_sub(1)), (half + 1, width.saturating_sub(half + 1))];

        let mut bottom = 0;
        for ((x, w), (heading, range)) in columns.into_iter().zip([
            ("Basic Variants", BASIC_INPUTS),
            ("States & Features", STATE_INPUTS),
        ]) {
            let mut y = 0;
            placements.push(Placement::heading(heading, x, y, w));
            y += 1;
            for index in range {
                let height = self.inputs[index].height();
                placements.push(Placement::input(index, x, y, w, height));
                y += height + 1;
            }
            bottom = bottom.max(y);
        }

        let mut y = bottom;
        placements.push(Placement::heading("Sizes", 0, y, width));
        y += 1;
        let third = width / 3;
        for (slot, index) in SIZE_INPUTS.enumerate() {
            let x = third * slot as u16;
            let w = if slot == 2 { width - x } else { third.saturating_sub(1) };
            let height = self.inputs[index].height();
            placements.push(Placement::input(index, x, y, w, height));
        }
        placements
    }

    fn render_table_section(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" DataTable Component ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected = self.selected.borrow();
        let list_height = if selected.is_empty() {
            0
        } else {
            (selected.len() as u16).min(5) + 2
        };
        let [controls_area, table_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(list_height),
        ])
        .areas(inner);

        let button_width = LOADING_BUTTON_LABEL.len() as u16 + 4;
        let [button_area, summary_area] =
            Layout::horizontal([Constraint::Length(button_width), Constraint::Min(1)])
                .areas(controls_area);

        let button_focused = self.focused() == DemoFocus::LoadingButton;
        let button_style = if button_focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };
        frame.render_widget(
            Paragraph::new(LOADING_BUTTON_LABEL)
                .alignment(Alignment::Center)
                .style(Style::default().fg(if button_focused { t.accent } else { t.fg }))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(button_style),
                ),
            button_area,
        );

        if let Some(summary) = self.selection_summary() {
            let badge_area = Rect::new(
                summary_area.x + 1,
                summary_area.y + 1,
                summary_area.width.saturating_sub(1),
                1,
            );
            Badge::new(summary)
                .variant(BadgeVariant::Outline)
                .render(frame, badge_area);
        }

        self.table
            .render(frame, table_area, self.focused() == DemoFocus::Table);

        if !selected.is_empty() {
            let lines: Vec<Line> = selected
                .iter()
                .map(|user| Line::styled(format!("• {user}"), Style::default().fg(t.muted)))
                .collect();
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .title(" Selected Users ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(t.border)),
                ),
                list_area,
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placed {
    Heading(&'static str),
    Input(usize),
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    item: Placed,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl Placement {
    fn heading(text: &'static str, x: u16, y: u16, width: u16) -> Self {
        Self {
            item: Placed::Heading(text),
            x,
            y,
            width,
            height: 1,
        }
    }

    fn input(index: usize, x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            item: Placed::Input(index),
            x,
            y,
            width,
            height,
        }
    }
}

fn theme_changed(action: ThemeToggleAction) -> DemoAction {
    let ThemeToggleAction::Changed(preference) = action;
    DemoAction::ThemeChanged(preference)
}

/// "Name (email)" when the record has both, else its name, else its JSON.
fn describe(record: &Value) -> String {
    let name = record.get("name").and_then(Value::as_str);
    let email = record.get("email").and_then(Value::as_str);
    match (name, email) {
        (Some(name), Some(email)) => format!("{name} ({email})"),
        (Some(name), None) => name.to_string(),
        _ => record.to_string(),
    }
}

/// The inputs shown on the page, in display order.
fn demo_inputs() -> Vec<InputField> {
    vec![
        InputField::new()
            .label("Outlined (Default)")
            .placeholder("Enter text...")
            .variant(InputVariant::Outlined)
            .clear_button(true),
        InputField::new()
            .label("Filled Variant")
            .placeholder("Enter text...")
            .variant(InputVariant::Filled)
            .helper_text("This is a filled input variant"),
        InputField::new()
            .label("Ghost Variant")
            .placeholder("Enter text...")
            .variant(InputVariant::Ghost)
            .helper_text("This is a ghost input variant"),
        InputField::new()
            .label("Password Input")
            .placeholder("Enter password...")
            .password(true)
            .clear_button(true),
        InputField::new()
            .label("Loading State")
            .placeholder("Loading...")
            .loading(true)
            .helper_text("Input with loading spinner"),
        InputField::new()
            .label("Error State")
            .placeholder("Enter valid email...")
            .invalid(true)
            .error_message("Please enter a valid email address"),
        InputField::new()
            .label("Disabled State")
            .placeholder("Disabled input...")
            .disabled(true)
            .helper_text("This input is disabled"),
        InputField::new()
            .label("Small")
            .placeholder("Small input...")
            .size(Size::Sm),
        InputField::new()
            .label("Medium (Default)")
            .placeholder("Medium input...")
            .size(Size::Md),
        InputField::new()
            .label("Large")
            .placeholder("Large input...")
            .size(Size::Lg),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortDirection;
    use crate::ui::theme::set_theme_preference;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use serial_test::serial;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focus(view: &mut DemoView, target: DemoFocus) {
        for _ in 0..view.focus_order.len() {
            if view.focused() == target {
                return;
            }
            view.focus_next();
        }
        panic!("{target:?} is not focusable");
    }

    fn render_text(view: &DemoView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_focus_skips_disabled_and_loading_inputs() {
        let view = DemoView::new(&Settings::default());
        assert_eq!(view.inputs().len(), 10);
        assert!(!view.focus_order.contains(&DemoFocus::Input(4)));
        assert!(!view.focus_order.contains(&DemoFocus::Input(6)));
        // toggle + 8 editable inputs + button + table
        assert_eq!(view.focus_order.len(), 11);
    }

    #[test]
    fn test_tab_cycles_and_section_follows() {
        let mut view = DemoView::new(&Settings::default());
        assert_eq!(view.focused(), DemoFocus::ThemeToggle);
        assert_eq!(view.section(), DemoSection::Inputs);

        view.handle_input(key(KeyCode::BackTab));
        assert_eq!(view.focused(), DemoFocus::Table);
        assert_eq!(view.section(), DemoSection::Table);
        assert_eq!(view.key_context(), KeyContext::Table);

        view.handle_input(key(KeyCode::Tab));
        assert_eq!(view.focused(), DemoFocus::ThemeToggle);
        // The toggle keeps whichever section was showing.
        assert_eq!(view.section(), DemoSection::Table);

        view.handle_input(key(KeyCode::Tab));
        assert_eq!(view.focused(), DemoFocus::Input(0));
        assert_eq!(view.section(), DemoSection::Inputs);
    }

    #[test]
    fn test_typing_into_focused_input() {
        let mut view = DemoView::new(&Settings::default());
        focus(&mut view, DemoFocus::Input(3));
        for c in "pw".chars() {
            view.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(view.inputs()[3].value(), "pw");
        assert_eq!(view.inputs()[3].display_value(), "••");
    }

    #[test]
    fn test_selection_summary_and_list() {
        let mut view = DemoView::new(&Settings::default());
        focus(&mut view, DemoFocus::Table);
        assert_eq!(view.selection_summary(), None);

        let action = view.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(action, Some(DemoAction::SelectionChanged(1)));
        assert_eq!(view.selection_summary().as_deref(), Some("1 user selected"));
        assert_eq!(view.selected_users(), vec!["John Doe (john.doe@example.com)"]);

        view.handle_input(key(KeyCode::Char('a')));
        assert_eq!(view.selection_summary().as_deref(), Some("4 users selected"));

        view.handle_input(key(KeyCode::Char('a')));
        assert_eq!(view.selection_summary(), None);
        assert!(view.selected_users().is_empty());
    }

    #[test]
    fn test_selection_follows_sort_order() {
        let mut view = DemoView::new(&Settings::default());
        focus(&mut view, DemoFocus::Table);
        view.handle_input(key(KeyCode::Char('s')));
        assert_eq!(view.table().sort_state().direction(), SortDirection::Ascending);

        view.handle_input(key(KeyCode::Char('a')));
        assert_eq!(
            view.selected_users()[0],
            "Alice Wilson (alice.wilson@example.com)"
        );
    }

    #[test]
    fn test_loading_button_starts_loading_and_tick_clears_it() {
        let settings = Settings {
            loading_demo_ms: 1,
            ..Settings::default()
        };
        let mut view = DemoView::new(&settings);
        focus(&mut view, DemoFocus::LoadingButton);
        assert_eq!(view.key_context(), KeyContext::Button);

        let action = view.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(DemoAction::LoadingStarted));
        assert!(view.table().is_loading());

        std::thread::sleep(Duration::from_millis(5));
        view.tick();
        assert!(!view.table().is_loading());
    }

    #[test]
    fn test_custom_records_infer_columns() {
        let records = vec![
            json!({"id": "a", "title": "Dune"}),
            json!({"id": "b", "title": "Emma"}),
        ];
        let mut view = DemoView::with_records(&Settings::default(), records);
        let titles: Vec<&str> = view.table().columns().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Id", "Title"]);

        focus(&mut view, DemoFocus::Table);
        view.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(view.selected_users(), vec![r#"{"id":"a","title":"Dune"}"#]);
    }

    #[test]
    #[serial]
    fn test_theme_menu_is_modal() {
        set_theme_preference(ThemePreference::Dark);
        let mut view = DemoView::new(&Settings::default());
        view.handle_input(key(KeyCode::Enter));
        assert!(view.is_modal());

        // Tab does not move focus while the menu is open.
        view.handle_input(key(KeyCode::Tab));
        assert_eq!(view.focused(), DemoFocus::ThemeToggle);

        view.handle_input(key(KeyCode::Up));
        let action = view.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(DemoAction::ThemeChanged(ThemePreference::Light)));
        assert!(!view.is_modal());
        set_theme_preference(ThemePreference::Dark);
    }

    #[test]
    #[serial]
    fn test_render_inputs_section() {
        set_theme_preference(ThemePreference::Dark);
        let view = DemoView::new(&Settings::default());
        let text = render_text(&view, 100, 40);
        assert!(text.contains("UI Component Library"));
        assert!(text.contains("Dark theme"));
        assert!(text.contains("Basic Variants"));
        assert!(text.contains("Outlined (Default)"));
        assert!(text.contains("Please enter a valid email address"));
    }

    #[test]
    #[serial]
    fn test_render_table_section_with_selection() {
        set_theme_preference(ThemePreference::Dark);
        let mut view = DemoView::new(&Settings::default());
        focus(&mut view, DemoFocus::Table);
        view.handle_input(key(KeyCode::Char(' ')));

        let text = render_text(&view, 100, 30);
        assert!(text.contains(LOADING_BUTTON_LABEL));
        assert!(text.contains("1 user selected"));
        assert!(text.contains("Selected Users"));
        assert!(text.contains("Jane Smith"));
    }

    #[test]
    fn test_inputs_scroll_to_focused() {
        let mut view = DemoView::new(&Settings::default());
        focus(&mut view, DemoFocus::Input(9));
        // Small terminal: the sizes row must still be drawn.
        let text = render_text(&view, 90, 20);
        assert!(text.contains("Large"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!({"name": "Ada"})), "Ada");
        assert_eq!(
            describe(&json!({"name": "Ada", "email": "ada@example.com"})),
            "Ada (ada@example.com)"
        );
        assert_eq!(describe(&json!({"id": 7})), r#"{"id":7}"#);
    }
}
