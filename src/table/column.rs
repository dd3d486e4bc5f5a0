//! Column descriptors.

use std::fmt;

use ratatui::{layout::Alignment, text::Line};

use super::value::{CellValue, Record};

/// Custom cell renderer: receives the projected value, the full record and
/// the row's position in the displayed sequence.
pub type CellRenderer<T> = Box<dyn Fn(Option<&CellValue>, &T, usize) -> Line<'static>>;

/// How a column projects its value out of a record.
pub enum Accessor<T> {
    /// Read the named field through [`Record::field`].
    Field(String),
    /// Apply a projection function.
    Func(Box<dyn Fn(&T) -> Option<CellValue>>),
}

/// Describes one displayed, optionally sortable, field.
///
/// Column keys must be unique within a table. This is not validated.
pub struct Column<T> {
    key: String,
    title: String,
    accessor: Accessor<T>,
    sortable: bool,
    render: Option<CellRenderer<T>>,
    width: Option<u16>,
    align: Alignment,
}

impl<T> Column<T> {
    /// Create a column that reads the field named after its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            accessor: Accessor::Field(key.clone()),
            key,
            title: title.into(),
            sortable: false,
            render: None,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Read a different field than the column key.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(name.into());
        self
    }

    /// Project values with a function instead of a field name.
    pub fn accessor(mut self, f: impl Fn(&T) -> Option<CellValue> + 'static) -> Self {
        self.accessor = Accessor::Func(Box::new(f));
        self
    }

    /// Set whether clicking the header sorts by this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Use a custom cell renderer.
    pub fn render_with(
        mut self,
        f: impl Fn(Option<&CellValue>, &T, usize) -> Line<'static> + 'static,
    ) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Fix the column width in cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the horizontal alignment of header and cells.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// The unique column key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the column is sortable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The fixed width, if any.
    pub fn fixed_width(&self) -> Option<u16> {
        self.width
    }

    /// The horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.align
    }

    /// Whether a custom renderer is installed.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }
}

impl<T: Record> Column<T> {
    /// Project this column's value out of `record`.
    pub fn value(&self, record: &T) -> Option<CellValue> {
        match &self.accessor {
            Accessor::Field(name) => record.field(name),
            Accessor::Func(f) => f(record),
        }
    }

    /// Produce the cell content for `record` at `index`.
    ///
    /// Without a custom renderer the value's display string is used and
    /// absent values render as an empty string.
    pub fn cell(&self, record: &T, index: usize) -> Line<'static> {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(value.as_ref(), record, index),
            None => Line::from(display_string(value.as_ref())),
        }
    }
}

/// Display string of an optional value; absent is empty.
pub fn display_string(value: Option<&CellValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_column_defaults() {
        let column: Column<Value> = Column::new("name", "Name");
        assert_eq!(column.key(), "name");
        assert_eq!(column.title(), "Name");
        assert!(!column.is_sortable());
        assert_eq!(column.fixed_width(), None);
        assert_eq!(column.alignment(), Alignment::Left);
        assert!(!column.has_renderer());
    }

    #[test]
    fn test_value_reads_key_field_by_default() {
        let column: Column<Value> = Column::new("name", "Name");
        let record = json!({"name": "Jane"});
        assert_eq!(column.value(&record), Some(CellValue::from("Jane")));
    }

    #[test]
    fn test_value_reads_custom_field() {
        let column: Column<Value> = Column::new("actions", "Actions").field("id");
        let record = json!({"id": 4});
        assert_eq!(column.value(&record), Some(CellValue::Int(4)));
    }

    #[test]
    fn test_value_with_accessor() {
        let column: Column<Value> = Column::new("len", "Length").accessor(|r: &Value| {
            r["name"]
                .as_str()
                .map(|s| CellValue::Int(s.len() as i64))
        });
        assert_eq!(column.value(&json!({"name": "abc"})), Some(CellValue::Int(3)));
    }

    #[test]
    fn test_cell_absent_value_is_empty() {
        let column: Column<Value> = Column::new("email", "Email");
        let line = column.cell(&json!({"email": null}), 0);
        assert_eq!(line.to_string(), "");
    }

    #[test]
    fn test_cell_uses_renderer() {
        let column: Column<Value> =
            Column::new("name", "Name").render_with(|value, _record, index| {
                Line::from(format!("{}:{}", index, display_string(value)))
            });
        let line = column.cell(&json!({"name": "Bob"}), 2);
        assert_eq!(line.to_string(), "2:Bob");
    }
}
