//! Column width discovery and content line layout.
//!
//! Both operate on display forms (already-converted cell text), so the
//! width measured here is exactly the text that gets printed.

use crate::border::VERTICAL;
use crate::cell::display_width;
use crate::options::Alignment;

/// Per-column content widths for one table.
///
/// Each entry is the widest display form found at that column index,
/// labels included. Columns no row reaches have width 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    /// Discover column widths from display forms.
    ///
    /// The column count is the longest of the rows and labels. Shorter rows
    /// simply never touch the trailing columns.
    pub fn discover<R, S>(rows: &[R], labels: Option<&[S]>) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let column_count = rows
            .iter()
            .map(|row| row.as_ref().len())
            .chain(labels.map(|labels| labels.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; column_count];
        let all_rows = rows.iter().map(|row| row.as_ref()).chain(labels);
        for row in all_rows {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(display_width(cell.as_ref()));
            }
        }

        ColumnWidths(widths)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table has no columns
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Width of one column
    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    /// Widths in column order
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for ColumnWidths {
    fn from(widths: Vec<usize>) -> Self {
        ColumnWidths(widths)
    }
}

/// Pad one cell's text to `width`, plus a single space on each side.
pub fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let pad = width.saturating_sub(display_width(text));
    let pad_left = match alignment {
        Alignment::Centered => pad / 2,
        Alignment::Left => 0,
    };
    let pad_right = pad - pad_left;

    format!(" {}{}{} ", " ".repeat(pad_left), text, " ".repeat(pad_right))
}

/// Lay out one row of cells between vertical rules.
///
/// A row with fewer cells than there are columns produces a shorter line;
/// missing cells are not filled in.
pub fn content_line<S: AsRef<str>>(
    cells: &[S],
    widths: &ColumnWidths,
    alignment: Alignment,
) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let width = widths.get(index).unwrap_or(0);
            pad_cell(cell.as_ref(), width, alignment)
        })
        .collect();

    let mut line = String::new();
    line.push(VERTICAL);
    line.push_str(&rendered.join(&VERTICAL.to_string()));
    line.push(VERTICAL);
    line
}
