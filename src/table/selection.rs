//! Selection tracking over the displayed sequence.
//!
//! The selection is a set of [`RowKey`]s. Mutations are pure functions that
//! return the next set together with the selected records to report, in
//! displayed order.

use std::collections::HashSet;

use super::identity::{RowKey, RowKeySource};
use super::value::Record;

/// The set of selected row identities for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: HashSet<RowKey>,
}

impl SelectionSet {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected identities, including stale ones.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `key` is selected.
    pub fn contains(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Iterate over the selected identities in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
        self.keys.iter()
    }

    /// Keep only the identities accepted by `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowKey) -> bool) {
        self.keys.retain(|key| keep(key));
    }
}

impl FromIterator<RowKey> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RowKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Result of a selection mutation.
#[derive(Debug)]
pub struct SelectionChange<'a, T> {
    /// The selection after the mutation.
    pub selection: SelectionSet,
    /// Displayed records whose identity is selected, in displayed order.
    pub selected: Vec<&'a T>,
}

/// Tri-state of a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    /// Nothing selected.
    #[default]
    Unchecked,
    /// Some but not all rows selected.
    Indeterminate,
    /// Every displayed row selected.
    Checked,
}

impl CheckState {
    /// Checkbox glyph for this state.
    pub fn glyph(&self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
            CheckState::Checked => "[x]",
        }
    }
}

/// True iff there are displayed rows and the selection size equals their
/// count.
pub fn is_all_selected(selected: usize, displayed: usize) -> bool {
    displayed > 0 && selected == displayed
}

/// True iff the selection size is strictly between zero and the displayed
/// count.
pub fn is_partially_selected(selected: usize, displayed: usize) -> bool {
    selected > 0 && selected < displayed
}

/// Header checkbox state derived from the two counts.
pub fn check_state(selected: usize, displayed: usize) -> CheckState {
    if is_all_selected(selected, displayed) {
        CheckState::Checked
    } else if is_partially_selected(selected, displayed) {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

/// Displayed records whose identity is in `selection`, in displayed order.
pub fn selected_in<'a, T: Record>(
    selection: &SelectionSet,
    displayed: &[&'a T],
    row_key: &RowKeySource<T>,
) -> Vec<&'a T> {
    displayed
        .iter()
        .enumerate()
        .filter(|(index, record)| selection.contains(&row_key.resolve(record, *index)))
        .map(|(_, record)| *record)
        .collect()
}

/// Mark `record`, sitting at `index` in the displayed sequence, as selected
/// or not.
pub fn apply_toggle<'a, T: Record>(
    selection: &SelectionSet,
    displayed: &[&'a T],
    record: &T,
    index: usize,
    checked: bool,
    row_key: &RowKeySource<T>,
) -> SelectionChange<'a, T> {
    let key = row_key.resolve(record, index);
    let mut next = selection.clone();

    if checked {
        next.keys.insert(key);
    } else {
        next.keys.remove(&key);
    }

    let selected = selected_in(&next, displayed, row_key);
    SelectionChange {
        selection: next,
        selected,
    }
}

/// Select every displayed record, or clear the selection.
pub fn apply_select_all<'a, T: Record>(
    displayed: &[&'a T],
    checked: bool,
    row_key: &RowKeySource<T>,
) -> SelectionChange<'a, T> {
    if !checked {
        return SelectionChange {
            selection: SelectionSet::new(),
            selected: Vec::new(),
        };
    }

    let selection = displayed
        .iter()
        .enumerate()
        .map(|(index, record)| row_key.resolve(record, index))
        .collect();

    SelectionChange {
        selection,
        selected: displayed.to_vec(),
    }
}

/// Receives the selected records after every selection mutation.
///
/// Called synchronously; nothing is done with the outcome.
pub trait SelectionObserver<T> {
    /// The selection changed; `selected` is in displayed order.
    fn selection_changed(&mut self, selected: &[&T]);
}

impl<T, F> SelectionObserver<T> for F
where
    F: FnMut(&[&T]),
{
    fn selection_changed(&mut self, selected: &[&T]) {
        self(selected)
    }
}
