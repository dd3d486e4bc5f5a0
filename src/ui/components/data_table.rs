//! Sortable, selectable data table component.
//!
//! `DataTable` embeds the pure sort and selection functions from
//! [`crate::table`] and owns the state they operate on: the sort state, the
//! selection set, a row cursor and a focused header column. Every selection
//! mutation is reported synchronously to the installed
//! [`SelectionObserver`].
//!
//! ## Keys
//!
//! - `j`/`k` or arrows move the row cursor, `g`/`G` jump to the ends
//! - `h`/`l` or arrows move the focused header column
//! - `s` or Enter "clicks" the focused header (cycles the sort)
//! - Space toggles the row under the cursor
//! - `a` toggles select-all

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::debug;

use super::loading::{LoadingIndicator, SpinnerStyle};
use crate::table::{
    apply_select_all, apply_toggle, check_state, selected_in, sorted_indices, CheckState, Column,
    Record, RowKey, RowKeySource, SelectionObserver, SelectionSet, SortDirection, SortState,
};
use crate::ui::size::Size;
use crate::ui::theme::theme;

/// Placeholder shown when there are no rows.
pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// Width of the checkbox column.
const CHECKBOX_WIDTH: u16 = 3;

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody {
    /// A spinner replaces the rows.
    Loading,
    /// A single "no data" placeholder.
    Empty,
    /// The displayed rows.
    Rows,
}

/// Decide what the body shows. Loading wins over the empty placeholder.
pub fn body_state(loading: bool, displayed: usize) -> TableBody {
    if loading {
        TableBody::Loading
    } else if displayed == 0 {
        TableBody::Empty
    } else {
        TableBody::Rows
    }
}

/// Action resulting from table input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableAction {
    /// The row cursor or focused column moved.
    CursorMoved,
    /// The sort state changed.
    SortChanged(SortState),
    /// The selection changed; carries the number of selected records
    /// reported to the observer.
    SelectionChanged(usize),
}

/// Records in display order, borrowed from `records`.
fn display_refs<'a, T>(records: &'a [T], order: &[usize]) -> Vec<&'a T> {
    order.iter().map(|&index| &records[index]).collect()
}

/// A sortable, selectable table over records of type `T`.
pub struct DataTable<T> {
    records: Vec<T>,
    columns: Vec<Column<T>>,
    row_key: RowKeySource<T>,
    selectable: bool,
    size: Size,
    empty_text: String,
    sort: SortState,
    selection: SelectionSet,
    /// Positions into `records`, in display order.
    order: Vec<usize>,
    /// Row cursor, as a display index.
    cursor: usize,
    focused_column: usize,
    loader: LoadingIndicator,
    observer: Option<Box<dyn SelectionObserver<T>>>,
}

impl<T: Record> DataTable<T> {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            records: Vec::new(),
            columns,
            row_key: RowKeySource::default(),
            selectable: false,
            size: Size::default(),
            empty_text: DEFAULT_EMPTY_TEXT.to_string(),
            sort: SortState::new(),
            selection: SelectionSet::new(),
            order: Vec::new(),
            cursor: 0,
            focused_column: 0,
            loader: LoadingIndicator::new(),
            observer: None,
        }
    }

    /// Set the records.
    pub fn with_data(mut self, records: Vec<T>) -> Self {
        self.set_data(records);
        self
    }

    /// Set how row identities are derived.
    pub fn with_row_key(mut self, row_key: RowKeySource<T>) -> Self {
        self.row_key = row_key;
        self
    }

    /// Enable or disable the checkbox column.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the size category.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the placeholder shown when there are no rows.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Set the spinner used while loading.
    pub fn with_spinner(mut self, style: SpinnerStyle) -> Self {
        self.loader.set_style(style);
        self
    }

    /// Install the selection observer.
    pub fn with_observer(mut self, observer: impl SelectionObserver<T> + 'static) -> Self {
        self.on_selection_change(observer);
        self
    }

    /// Replace the selection observer.
    pub fn on_selection_change(&mut self, observer: impl SelectionObserver<T> + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replace the records.
    ///
    /// The sort state and the selection set are kept; identities that no
    /// longer match a displayed row stay selected until toggled off or
    /// removed with [`prune_selection`](Self::prune_selection).
    pub fn set_data(&mut self, records: Vec<T>) {
        self.records = records;
        self.refresh_order();
        debug!(rows = self.records.len(), "Table data replaced");
    }

    /// The records in input order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The column descriptors.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// The current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// The current selection set.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether the checkbox column is shown.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// The size category.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Change the size category.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The empty placeholder text.
    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    /// Set or clear the loading flag. Sort and selection keep working.
    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.loader.start();
        } else {
            self.loader.stop();
        }
    }

    /// Show the loading placeholder for a fixed duration.
    pub fn start_loading_for(&mut self, duration: Duration) {
        self.loader.start_for(duration);
    }

    /// Whether the loading placeholder is shown.
    pub fn is_loading(&self) -> bool {
        self.loader.is_active()
    }

    /// Advance the spinner. Returns true if a timed loading period ended.
    pub fn tick(&mut self) -> bool {
        self.loader.tick()
    }

    /// The records in display order.
    pub fn displayed(&self) -> Vec<&T> {
        display_refs(&self.records, &self.order)
    }

    /// Number of displayed rows.
    pub fn displayed_len(&self) -> usize {
        self.order.len()
    }

    /// What the body currently shows.
    pub fn body(&self) -> TableBody {
        body_state(self.is_loading(), self.displayed_len())
    }

    /// Identity of the row at `display_index`.
    pub fn row_key_at(&self, display_index: usize) -> Option<RowKey> {
        let &position = self.order.get(display_index)?;
        Some(self.row_key.resolve(&self.records[position], display_index))
    }

    /// Whether the row at `display_index` is selected.
    pub fn is_row_selected(&self, display_index: usize) -> bool {
        self.row_key_at(display_index)
            .map(|key| self.selection.contains(&key))
            .unwrap_or(false)
    }

    /// The selected records, in display order.
    pub fn selected_records(&self) -> Vec<&T> {
        selected_in(&self.selection, &self.displayed(), &self.row_key)
    }

    /// State of the select-all checkbox.
    pub fn check_state(&self) -> CheckState {
        check_state(self.selection.len(), self.displayed_len())
    }

    /// Click the header of the column with `key`.
    ///
    /// Returns the new sort state if it changed.
    pub fn click_header(&mut self, key: &str) -> Option<SortState> {
        let column = self.columns.iter().find(|column| column.key() == key)?;
        let next = self.sort.clicked(column);
        if next == self.sort {
            return None;
        }

        debug!(column = key, direction = ?next.direction(), "Sort changed");
        self.sort = next;
        self.refresh_order();
        Some(self.sort.clone())
    }

    /// Check or uncheck the row at `display_index`.
    ///
    /// Returns the number of selected records reported to the observer, or
    /// `None` if the table is not selectable or the index is out of range.
    pub fn toggle_row(&mut self, display_index: usize, checked: bool) -> Option<usize> {
        if !self.selectable {
            return None;
        }

        let displayed = display_refs(&self.records, &self.order);
        let record = *displayed.get(display_index)?;
        let change = apply_toggle(
            &self.selection,
            &displayed,
            record,
            display_index,
            checked,
            &self.row_key,
        );

        self.selection = change.selection;
        let count = change.selected.len();
        debug!(row = display_index, checked, selected = count, "Row toggled");

        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&change.selected);
        }
        Some(count)
    }

    /// Flip the row under the cursor.
    pub fn toggle_cursor_row(&mut self) -> Option<usize> {
        let checked = !self.is_row_selected(self.cursor);
        self.toggle_row(self.cursor, checked)
    }

    /// Select every displayed row, or clear the selection.
    pub fn select_all(&mut self, checked: bool) -> Option<usize> {
        if !self.selectable {
            return None;
        }

        let displayed = display_refs(&self.records, &self.order);
        let change = apply_select_all(&displayed, checked, &self.row_key);

        self.selection = change.selection;
        let count = change.selected.len();
        debug!(checked, selected = count, "Select all");

        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&change.selected);
        }
        Some(count)
    }

    /// Act like a click on the select-all checkbox.
    pub fn toggle_select_all(&mut self) -> Option<usize> {
        let checked = self.check_state() != CheckState::Checked;
        self.select_all(checked)
    }

    /// Drop selected identities that match no displayed row.
    ///
    /// Returns how many were removed. The observer is notified only when
    /// something was removed.
    pub fn prune_selection(&mut self) -> usize {
        let live: HashSet<RowKey> = (0..self.order.len())
            .filter_map(|index| self.row_key_at(index))
            .collect();

        let before = self.selection.len();
        self.selection.retain(|key| live.contains(key));
        let removed = before - self.selection.len();

        if removed > 0 {
            debug!(removed, "Pruned stale selection");
            let displayed = display_refs(&self.records, &self.order);
            let selected = selected_in(&self.selection, &displayed, &self.row_key);
            if let Some(observer) = self.observer.as_mut() {
                observer.selection_changed(&selected);
            }
        }
        removed
    }

    /// The row cursor, as a display index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the focused header column.
    pub fn focused_column(&self) -> usize {
        self.focused_column
    }

    /// Move the cursor up.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.displayed_len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the first row.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the last row.
    pub fn move_to_end(&mut self) {
        self.cursor = self.displayed_len().saturating_sub(1);
    }

    /// Focus the next header column.
    pub fn focus_next_column(&mut self) {
        if self.focused_column + 1 < self.columns.len() {
            self.focused_column += 1;
        }
    }

    /// Focus the previous header column.
    pub fn focus_prev_column(&mut self) {
        self.focused_column = self.focused_column.saturating_sub(1);
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DataTableAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_down();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_up();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.move_to_start();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.move_to_end();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
                self.focus_prev_column();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
                self.focus_next_column();
                Some(DataTableAction::CursorMoved)
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
                let key = self.columns.get(self.focused_column)?.key().to_string();
                self.click_header(&key).map(DataTableAction::SortChanged)
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => self
                .toggle_cursor_row()
                .map(DataTableAction::SelectionChanged),
            (KeyCode::Char('a'), KeyModifiers::NONE) => self
                .toggle_select_all()
                .map(DataTableAction::SelectionChanged),
            _ => None,
        }
    }

    fn refresh_order(&mut self) {
        self.order = sorted_indices(&self.records, &self.columns, &self.sort);
        if self.cursor >= self.order.len() {
            self.cursor = self.order.len().saturating_sub(1);
        }
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = Vec::with_capacity(self.columns.len() + 1);
        if self.selectable {
            widths.push(Constraint::Length(CHECKBOX_WIDTH));
        }
        widths.extend(self.columns.iter().map(|column| match column.fixed_width() {
            Some(width) => Constraint::Length(width),
            None => Constraint::Fill(1),
        }));
        widths
    }

    fn header_row(&self, focused: bool) -> Row<'static> {
        let t = theme();
        let mut cells = Vec::with_capacity(self.columns.len() + 1);

        if self.selectable {
            let style = if self.check_state() == CheckState::Unchecked {
                Style::default().fg(t.muted)
            } else {
                Style::default().fg(t.accent)
            };
            cells.push(Cell::from(Span::styled(self.check_state().glyph(), style)));
        }

        for (index, column) in self.columns.iter().enumerate() {
            let mut title_style = Style::default()
                .fg(t.table_header)
                .add_modifier(Modifier::BOLD);
            if focused && index == self.focused_column {
                title_style = title_style.add_modifier(Modifier::UNDERLINED);
            }

            let mut spans = vec![Span::styled(column.title().to_string(), title_style)];
            if column.is_sortable() {
                let indicator = match self.sort.direction_for(column.key()) {
                    SortDirection::Ascending => Span::styled(" ▲", Style::default().fg(t.fg)),
                    SortDirection::Descending => Span::styled(" ▼", Style::default().fg(t.fg)),
                    SortDirection::None => Span::styled(" ⇅", Style::default().fg(t.muted)),
                };
                spans.push(indicator);
            }

            cells.push(Cell::from(Line::from(spans).alignment(column.alignment())));
        }

        Row::new(cells).bottom_margin(1)
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        let t = theme();
        let height = self.size.row_height();

        self.displayed()
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let selected = self.is_row_selected(index);
                let mut cells = Vec::with_capacity(self.columns.len() + 1);

                if self.selectable {
                    let glyph = if selected {
                        CheckState::Checked.glyph()
                    } else {
                        CheckState::Unchecked.glyph()
                    };
                    cells.push(Cell::from(glyph));
                }

                for column in &self.columns {
                    let line = column.cell(record, index).alignment(column.alignment());
                    cells.push(Cell::from(line));
                }

                let style = if selected {
                    Style::default().fg(t.fg).bg(t.row_selected)
                } else {
                    Style::default().fg(t.fg)
                };

                Row::new(cells).style(style).height(height)
            })
            .collect()
    }

    /// Render the table.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to
    /// * `area` - The area to render in
    /// * `focused` - Whether the table has keyboard focus
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = self.header_row(focused);
        let spacing = self.size.column_spacing();

        match self.body() {
            TableBody::Rows => {
                let mut table = Table::new(self.body_rows(), self.widths())
                    .header(header)
                    .column_spacing(spacing);
                if focused {
                    table = table.highlight_style(Style::default().bg(t.row_cursor));
                }

                let mut state = TableState::default();
                state.select(Some(self.cursor));
                frame.render_stateful_widget(table, inner, &mut state);
            }
            body => {
                let table = Table::new(Vec::<Row>::new(), self.widths())
                    .header(header)
                    .column_spacing(spacing);
                frame.render_widget(table, inner);

                // Header line plus its bottom margin
                let placeholder_area = Rect {
                    y: inner.y.saturating_add(2),
                    height: inner.height.saturating_sub(2),
                    ..inner
                };

                if body == TableBody::Loading {
                    self.loader.render(frame, placeholder_area);
                } else {
                    let paragraph = Paragraph::new(self.empty_text.clone())
                        .style(Style::default().fg(t.muted))
                        .alignment(Alignment::Center);
                    frame.render_widget(paragraph, placeholder_area);
                }
            }
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.records.len())
            .field("columns", &self.columns)
            .field("row_key", &self.row_key)
            .field("selectable", &self.selectable)
            .field("size", &self.size)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("cursor", &self.cursor)
            .field("loading", &self.loader.is_active())
            .finish_non_exhaustive()
    }
}
