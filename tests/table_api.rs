//! Behaviour of the public table API as seen by an embedding application.

use std::cell::RefCell;
use std::rc::Rc;

use componentkit::table::{
    apply_select_all, apply_toggle, compute_display_order, CellValue, Column, Record, RowKey,
    RowKeySource, SelectionSet, SortDirection, SortState,
};
use componentkit::ui::components::{DataTable, TableBody};
use serde_json::{json, Value};

fn letters() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "B"}),
        json!({"id": 2, "name": "A"}),
        json!({"id": 3, "name": "C"}),
    ]
}

fn name_column() -> Vec<Column<Value>> {
    vec![Column::new("name", "Name").sortable(true)]
}

fn names(records: &[&Value]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn ids(records: &[&Value]) -> Vec<i64> {
    records.iter().filter_map(|r| r["id"].as_i64()).collect()
}

/// A table whose observer records every emitted list of ids.
fn observed_table(records: Vec<Value>) -> (DataTable<Value>, Rc<RefCell<Vec<Vec<i64>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let table = DataTable::new(name_column())
        .with_data(records)
        .selectable(true)
        .with_observer(move |selected: &[&Value]| sink.borrow_mut().push(ids(selected)));
    (table, calls)
}

#[test]
fn header_clicks_cycle_through_all_three_orders() {
    let mut table = DataTable::new(name_column()).with_data(letters());

    table.click_header("name");
    assert_eq!(names(&table.displayed()), ["A", "B", "C"]);

    table.click_header("name");
    assert_eq!(names(&table.displayed()), ["C", "B", "A"]);

    table.click_header("name");
    assert_eq!(names(&table.displayed()), ["B", "A", "C"]);
    assert_eq!(table.sort_state().direction(), SortDirection::None);
}

#[test]
fn observer_receives_selection_in_displayed_order() {
    let (mut table, calls) = observed_table(letters());

    // Row 1 displays id=2, row 0 displays id=1.
    table.toggle_row(1, true);
    table.toggle_row(0, true);
    assert_eq!(calls.borrow().last(), Some(&vec![1, 2]));

    table.toggle_row(1, false);
    assert_eq!(calls.borrow().last(), Some(&vec![1]));
    assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn observer_follows_sorted_order_not_check_order() {
    let (mut table, calls) = observed_table(letters());
    table.click_header("name");

    // Displayed: A(id 2), B(id 1), C(id 3).
    table.toggle_row(0, true);
    table.toggle_row(1, true);
    assert_eq!(calls.borrow().last(), Some(&vec![2, 1]));

    table.toggle_row(0, false);
    assert_eq!(calls.borrow().last(), Some(&vec![1]));
}

#[test]
fn selection_survives_resorting() {
    let (mut table, calls) = observed_table(letters());
    table.toggle_row(0, true);
    table.toggle_row(2, true);

    table.click_header("name");
    assert!(table.is_row_selected(1));
    assert!(table.is_row_selected(2));
    assert!(!table.is_row_selected(0));
    assert_eq!(ids(&table.selected_records()), [1, 3]);
    // Sorting alone emits nothing.
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn select_all_reports_every_displayed_record_once() {
    let (mut table, calls) = observed_table(letters());
    table.click_header("name");
    table.click_header("name");

    assert_eq!(table.select_all(true), Some(3));
    assert_eq!(calls.borrow().last(), Some(&vec![3, 1, 2]));

    assert_eq!(table.select_all(false), Some(0));
    assert_eq!(calls.borrow().last(), Some(&Vec::new()));
    assert!(table.selection().is_empty());
}

#[test]
fn absent_values_sort_last_in_both_directions() {
    let records = vec![
        json!({"id": 1}),
        json!({"id": 2, "name": "Z"}),
        json!({"id": 3, "name": null}),
        json!({"id": 4, "name": "A"}),
    ];
    let columns = name_column();

    let asc = compute_display_order(&records, &columns, &SortState::ascending("name"));
    assert_eq!(ids(&asc), [4, 2, 1, 3]);

    let desc = compute_display_order(&records, &columns, &SortState::descending("name"));
    assert_eq!(ids(&desc), [2, 4, 1, 3]);
}

#[test]
fn equal_values_keep_input_order() {
    let records = vec![
        json!({"id": 1, "role": "User"}),
        json!({"id": 2, "role": "Admin"}),
        json!({"id": 3, "role": "User"}),
        json!({"id": 4, "role": "Admin"}),
    ];
    let columns = vec![Column::new("role", "Role").sortable(true)];

    let asc = compute_display_order(&records, &columns, &SortState::ascending("role"));
    assert_eq!(ids(&asc), [2, 4, 1, 3]);

    let desc = compute_display_order(&records, &columns, &SortState::descending("role"));
    assert_eq!(ids(&desc), [1, 3, 2, 4]);
}

#[test]
fn non_sortable_column_is_ignored() {
    let records = letters();
    let columns = vec![Column::<Value>::new("name", "Name")];
    let order = compute_display_order(&records, &columns, &SortState::ascending("name"));
    assert_eq!(names(&order), ["B", "A", "C"]);

    let state = SortState::new().clicked(&columns[0]);
    assert!(!state.is_active());
}

#[test]
fn toggling_the_same_row_twice_is_idempotent() {
    let records = letters();
    let displayed: Vec<&Value> = records.iter().collect();
    let row_key = RowKeySource::default();

    let once = apply_toggle(&SelectionSet::new(), &displayed, displayed[1], 1, true, &row_key);
    let twice = apply_toggle(&once.selection, &displayed, displayed[1], 1, true, &row_key);
    assert_eq!(ids(&once.selected), ids(&twice.selected));
    assert_eq!(once.selection, twice.selection);

    let all = apply_select_all(&displayed, true, &row_key);
    assert_eq!(all.selection.len(), 3);
}

#[test]
fn row_key_falls_back_to_position_only_when_field_is_absent() {
    let records = vec![json!({"name": "no id"}), json!({"id": "abc", "name": "text id"})];
    let row_key: RowKeySource<Value> = RowKeySource::default();

    assert_eq!(row_key.resolve(&records[0], 5), RowKey::Num(5));
    assert_eq!(row_key.resolve(&records[1], 5), RowKey::from("abc"));
}

#[test]
fn custom_row_key_function() {
    let records = vec![
        json!({"email": "a@example.com"}),
        json!({"email": "b@example.com"}),
    ];
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let mut table = DataTable::new(vec![Column::new("email", "Email").sortable(true)])
        .with_data(records)
        .with_row_key(RowKeySource::func(|r: &Value| {
            RowKey::from(r["email"].as_str().unwrap_or_default())
        }))
        .selectable(true)
        .with_observer(move |_: &[&Value]| *sink.borrow_mut() += 1);

    table.toggle_row(1, true);
    assert!(table
        .selection()
        .contains(&RowKey::from("b@example.com")));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn selection_is_inert_when_not_selectable() {
    let mut table = DataTable::new(name_column()).with_data(letters());
    assert_eq!(table.toggle_row(0, true), None);
    assert_eq!(table.select_all(true), None);
    assert!(table.selection().is_empty());
}

#[test]
fn loading_takes_precedence_over_empty() {
    let mut table: DataTable<Value> = DataTable::new(name_column());
    assert_eq!(table.body(), TableBody::Empty);

    table.set_loading(true);
    assert_eq!(table.body(), TableBody::Loading);

    table.set_data(letters());
    assert_eq!(table.body(), TableBody::Loading);

    table.set_loading(false);
    assert_eq!(table.body(), TableBody::Rows);
}

/// A typed record, to show the table is not tied to JSON.
struct Book {
    isbn: &'static str,
    title: &'static str,
    pages: Option<i64>,
}

impl Record for Book {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "isbn" => Some(self.isbn.into()),
            "title" => Some(self.title.into()),
            "pages" => self.pages.map(CellValue::Int),
            _ => None,
        }
    }
}

#[test]
fn typed_records_with_accessor_columns() {
    let books = vec![
        Book { isbn: "1", title: "Dune", pages: Some(412) },
        Book { isbn: "2", title: "Emma", pages: None },
        Book { isbn: "3", title: "Ulysses", pages: Some(730) },
    ];
    let columns = vec![
        Column::new("pages", "Pages").sortable(true),
        Column::new("length", "Title length")
            .accessor(|b: &Book| Some(CellValue::Int(b.title.len() as i64)))
            .sortable(true),
    ];

    let by_pages = compute_display_order(&books, &columns, &SortState::descending("pages"));
    let titles: Vec<&str> = by_pages.iter().map(|b| b.title).collect();
    assert_eq!(titles, ["Ulysses", "Dune", "Emma"]);

    let by_length = compute_display_order(&books, &columns, &SortState::ascending("length"));
    let titles: Vec<&str> = by_length.iter().map(|b| b.title).collect();
    assert_eq!(titles, ["Dune", "Emma", "Ulysses"]);

    let mut table = DataTable::new(columns)
        .with_data(books)
        .with_row_key(RowKeySource::field("isbn"))
        .selectable(true);
    table.toggle_row(2, true);
    assert!(table.selection().contains(&RowKey::from("3")));
}
