//! Single-column sort engine.
//!
//! Sorting never mutates the input. Absent values always sort after present
//! ones, in both directions, and equal values keep their input order.

use std::cmp::Ordering;

use super::column::Column;
use super::value::{CellValue, Record};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
    /// No sort applied.
    #[default]
    None,
}

/// The active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// The unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort ascending by `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending by `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Descending,
        }
    }

    /// The active column key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The active direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether a sort is applied.
    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.direction != SortDirection::None
    }

    /// Direction applied to the column `key`, `None` if it is not active.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        if self.key.as_deref() == Some(key) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// The state after the header of `column` is clicked.
    ///
    /// Cycles none → ascending → descending → none on the same column;
    /// a different column always starts ascending. Non-sortable columns
    /// leave the state unchanged.
    pub fn clicked<T>(&self, column: &Column<T>) -> SortState {
        if !column.is_sortable() {
            return self.clone();
        }

        if self.key.as_deref() == Some(column.key()) {
            match self.direction {
                SortDirection::Ascending => return SortState::descending(column.key()),
                SortDirection::Descending => return SortState::new(),
                SortDirection::None => {}
            }
        }

        SortState::ascending(column.key())
    }

    /// Resolve the sortable column this state refers to, if any.
    pub fn active_column<'c, T>(&self, columns: &'c [Column<T>]) -> Option<&'c Column<T>> {
        if self.direction == SortDirection::None {
            return None;
        }
        let key = self.key.as_deref()?;
        columns
            .iter()
            .find(|column| column.key() == key)
            .filter(|column| column.is_sortable())
    }
}

/// Compare two optional values for the given direction.
///
/// Absent sorts last regardless of direction; the direction only inverts
/// present-vs-present comparisons.
pub fn compare_values(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.natural_cmp(b);
            if direction == SortDirection::Descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// Positions into `records`, in display order.
pub fn sorted_indices<T: Record>(
    records: &[T],
    columns: &[Column<T>],
    state: &SortState,
) -> Vec<usize> {
    let Some(column) = state.active_column(columns) else {
        return (0..records.len()).collect();
    };

    let mut keyed: Vec<(usize, Option<CellValue>)> = records
        .iter()
        .enumerate()
        .map(|(index, record)| (index, column.value(record)))
        .collect();

    // `sort_by` is stable, ties keep input order.
    keyed.sort_by(|a, b| compare_values(a.1.as_ref(), b.1.as_ref(), state.direction));

    keyed.into_iter().map(|(index, _)| index).collect()
}

/// Records in display order for the given sort state.
///
/// Without an active sortable column the records come back in input order.
pub fn compute_display_order<'a, T: Record>(
    records: &'a [T],
    columns: &[Column<T>],
    state: &SortState,
) -> Vec<&'a T> {
    sorted_indices(records, columns, state)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "B"}),
            json!({"id": 2, "name": "A"}),
            json!({"id": 3, "name": "C"}),
        ]
    }

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name").sortable(true),
            Column::new("id", "Id"),
        ]
    }

    fn names(ordered: &[&Value]) -> Vec<String> {
        ordered
            .iter()
            .map(|r| r["name"].as_str().unwrap_or("-").to_string())
            .collect()
    }

    #[test]
    fn test_unsorted_returns_input_order() {
        let data = records();
        let ordered = compute_display_order(&data, &columns(), &SortState::new());
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_ascending_and_descending() {
        let data = records();
        let ordered = compute_display_order(&data, &columns(), &SortState::ascending("name"));
        assert_eq!(names(&ordered), vec!["A", "B", "C"]);

        let ordered = compute_display_order(&data, &columns(), &SortState::descending("name"));
        assert_eq!(names(&ordered), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_unknown_or_unsortable_column_is_ignored() {
        let data = records();
        let ordered = compute_display_order(&data, &columns(), &SortState::ascending("missing"));
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);

        let ordered = compute_display_order(&data, &columns(), &SortState::descending("id"));
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_absent_values_sort_last_in_both_directions() {
        let data = vec![
            json!({"name": null, "tag": "x"}),
            json!({"name": "B"}),
            json!({"tag": "y"}),
            json!({"name": "A"}),
        ];
        let cols = columns();

        let asc = compute_display_order(&data, &cols, &SortState::ascending("name"));
        assert_eq!(asc[0]["name"], "A");
        assert_eq!(asc[1]["name"], "B");
        assert_eq!(asc[2]["tag"], "x");
        assert_eq!(asc[3]["tag"], "y");

        let desc = compute_display_order(&data, &cols, &SortState::descending("name"));
        assert_eq!(desc[0]["name"], "B");
        assert_eq!(desc[1]["name"], "A");
        assert_eq!(desc[2]["tag"], "x");
        assert_eq!(desc[3]["tag"], "y");
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![
            json!({"id": 1, "role": "User"}),
            json!({"id": 2, "role": "Admin"}),
            json!({"id": 3, "role": "User"}),
            json!({"id": 4, "role": "Admin"}),
        ];
        let cols = vec![Column::new("role", "Role").sortable(true)];

        let asc = compute_display_order(&data, &cols, &SortState::ascending("role"));
        let ids: Vec<i64> = asc.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let desc = compute_display_order(&data, &cols, &SortState::descending("role"));
        let ids: Vec<i64> = desc.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_numeric_and_date_ordering() {
        let data = vec![
            json!({"n": 10, "d": "2024-01-15"}),
            json!({"n": 9, "d": "2023-12-31"}),
            json!({"n": 100, "d": "2024-01-02"}),
        ];
        let cols = vec![
            Column::new("n", "N").sortable(true),
            Column::new("d", "D").sortable(true),
        ];

        let by_n = sorted_indices(&data, &cols, &SortState::ascending("n"));
        assert_eq!(by_n, vec![1, 0, 2]);

        let by_d = sorted_indices(&data, &cols, &SortState::descending("d"));
        assert_eq!(by_d, vec![0, 2, 1]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let data = records();
        let before = data.clone();
        let _ = compute_display_order(&data, &columns(), &SortState::ascending("name"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_click_cycle() {
        let cols = columns();
        let name = &cols[0];

        let state = SortState::new().clicked(name);
        assert_eq!(state, SortState::ascending("name"));

        let state = state.clicked(name);
        assert_eq!(state, SortState::descending("name"));

        let state = state.clicked(name);
        assert_eq!(state, SortState::new());
        assert!(!state.is_active());
    }

    #[test]
    fn test_click_other_column_starts_ascending() {
        let cols = vec![
            Column::<Value>::new("name", "Name").sortable(true),
            Column::new("email", "Email").sortable(true),
        ];
        let state = SortState::descending("name").clicked(&cols[1]);
        assert_eq!(state, SortState::ascending("email"));
    }

    #[test]
    fn test_click_unsortable_is_noop() {
        let cols = columns();
        let state = SortState::ascending("name");
        assert_eq!(state.clicked(&cols[1]), state);
    }

    #[test]
    fn test_three_clicks_restore_order() {
        let data = records();
        let cols = columns();
        let mut state = SortState::new();
        for _ in 0..3 {
            state = state.clicked(&cols[0]);
        }
        let ordered = compute_display_order(&data, &cols, &state);
        assert_eq!(names(&ordered), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_direction_for() {
        let state = SortState::ascending("name");
        assert_eq!(state.direction_for("name"), SortDirection::Ascending);
        assert_eq!(state.direction_for("email"), SortDirection::None);
    }
}
