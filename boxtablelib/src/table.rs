//! An owned, serializable table.
//!
//! `Table` holds labels and rows as [`CellValue`]s, so it can be built up
//! incrementally, loaded from JSON, and rendered any number of times.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::CellValue;
use crate::layout::ColumnWidths;
use crate::options::RenderOptions;
use crate::render::render_with;
use crate::Result;

/// Table data: optional labels plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column labels, rendered as a header above a separator line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CellValue>>,
    /// Data rows, in display order
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows of anything convertible to cells
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        let mut table = Self::new();
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Builder: set the column labels
    pub fn with_labels<C: Into<CellValue>>(mut self, labels: impl IntoIterator<Item = C>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Append a data row
    pub fn push_row<C: Into<CellValue>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of data rows (labels not included)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns: the longest of the rows and labels
    pub fn column_count(&self) -> usize {
        self.column_widths().len()
    }

    /// Widths each column would be rendered at
    pub fn column_widths(&self) -> ColumnWidths {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let labels: Option<Vec<String>> = self
            .labels
            .as_ref()
            .map(|labels| labels.iter().map(ToString::to_string).collect());

        ColumnWidths::discover(&rows, labels.as_deref())
    }

    /// Render the table
    pub fn render(&self, options: &RenderOptions) -> Result<String> {
        render_with(&self.rows, self.labels.as_deref(), options)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render(&RenderOptions::default()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Alignment;
    use pretty_assertions::assert_eq;

    fn ducks() -> Table {
        Table::from_rows(vec![
            vec![CellValue::from("Ducky Yellow"), CellValue::from(3)],
            vec![CellValue::from("Ducky Dave"), CellValue::from(12)],
        ])
        .with_labels(["Name", "Duckiness"])
    }

    #[test]
    fn test_builder() {
        let mut table = Table::new().with_labels(["A", "B"]);
        table.push_row(["x", "y"]);
        table.push_row([1, 2]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(
            table.labels,
            Some(vec![CellValue::text("A"), CellValue::text("B")])
        );
        assert_eq!(table.rows[1], vec![CellValue::Integer(1), CellValue::Integer(2)]);
    }

    #[test]
    fn test_column_widths() {
        let table = ducks();
        assert_eq!(table.column_widths().as_slice(), &[12, 9]);
    }

    #[test]
    fn test_column_count_ragged() {
        let table = Table::from_rows(vec![vec!["a"], vec!["b", "c", "d"]]);
        assert_eq!(table.column_count(), 3);
        assert_eq!(Table::new().column_count(), 0);
    }

    #[test]
    fn test_render_centered() {
        let table = ducks();
        let options = RenderOptions::new().alignment(Alignment::Centered);

        assert_eq!(
            table.render(&options).unwrap(),
            [
                "┌──────────────┬───────────┐",
                "│     Name     │ Duckiness │",
                "├──────────────┼───────────┤",
                "│ Ducky Yellow │     3     │",
                "│  Ducky Dave  │    12     │",
                "└──────────────┴───────────┘",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_labels_render_like_none() {
        let mut table = Table::new().with_labels(Vec::<CellValue>::new());
        table.push_row(["a"]);

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.to_string(), "┌───┐\n│ a │\n└───┘");
    }

    #[test]
    fn test_display_uses_defaults() {
        let table = Table::from_rows(vec![vec!["Jake"], vec!["Not Joe"]]);
        assert_eq!(
            table.to_string(),
            ["┌─────────┐", "│ Jake    │", "│ Not Joe │", "└─────────┘"].join("\n")
        );
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"labels": ["User", "Messages"], "rows": [["Lemon", 183285], ["Joe", -12]]}"#;
        let table: Table = serde_json::from_str(json).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], CellValue::Integer(183285));
        assert_eq!(table.rows[1][1], CellValue::Integer(-12));
    }

    #[test]
    fn test_deserialize_without_labels_or_rows() {
        let table: Table = serde_json::from_str("{}").unwrap();
        assert_eq!(table, Table::new());
    }

    #[test]
    fn test_serialize_skips_missing_labels() {
        let table = Table::from_rows(vec![vec![1.5]]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"rows":[[1.5]]}"#);
    }
}
