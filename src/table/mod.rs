//! Sort and selection core of the data table.
//!
//! This module is independent of any terminal: it projects records into
//! comparable values, orders them by a single active column, and tracks a
//! set of selected row identities. The stateful, rendered component built on
//! top of it is [`crate::ui::DataTable`].

mod column;
mod identity;
mod selection;
mod sort;
mod value;

pub use column::{display_string, Accessor, CellRenderer, Column};
pub use identity::{RowKey, RowKeySource, DEFAULT_KEY_FIELD};
pub use selection::{
    apply_select_all, apply_toggle, check_state, is_all_selected, is_partially_selected,
    selected_in, CheckState, SelectionChange, SelectionObserver, SelectionSet,
};
pub use sort::{compare_values, compute_display_order, sorted_indices, SortDirection, SortState};
pub use value::{CellValue, Record};
