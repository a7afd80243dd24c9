//! Table rendering: display forms in, box-drawn text out.
//!
//! Rendering runs in three passes over the converted cells:
//! 1. Width discovery (one width per column, labels included)
//! 2. Border synthesis (top, separator, bottom)
//! 3. Content lines (labels first, then each row in input order)
//!
//! Nothing is cached between calls.

use std::fmt::Display;

use crate::border::{border_line, BorderKind};
use crate::cell::display_form;
use crate::error::{RowRef, TableError};
use crate::layout::{content_line, ColumnWidths};
use crate::options::RenderOptions;
use crate::Result;

/// Render rows (and optional labels) as a box-drawn table.
///
/// With `centered`, every cell is centered in its column; otherwise cells
/// are left-aligned. Rows may differ in length.
///
/// # Example
///
/// ```rust
/// use boxtablelib::render;
///
/// let rows = vec![vec!["Ducky Dave", "12"], vec!["Ducky Tube", "7"]];
/// let table = render(&rows, Some(&["Name", "Duckiness"][..]), false).unwrap();
///
/// assert_eq!(
///     table,
///     "┌────────────┬───────────┐\n\
///      │ Name       │ Duckiness │\n\
///      ├────────────┼───────────┤\n\
///      │ Ducky Dave │ 12        │\n\
///      │ Ducky Tube │ 7         │\n\
///      └────────────┴───────────┘"
/// );
/// ```
pub fn render<R, T, L>(rows: &[R], labels: Option<&[L]>, centered: bool) -> Result<String>
where
    R: AsRef<[T]>,
    T: Display,
    L: Display,
{
    render_with(rows, labels, &RenderOptions::new().centered(centered))
}

/// Render with explicit [`RenderOptions`].
///
/// An empty label row is treated as no labels at all.
///
/// Fails if a cell's `Display` implementation errors, or, in strict mode,
/// if any row or the labels have a different length than the column count.
pub fn render_with<R, T, L>(
    rows: &[R],
    labels: Option<&[L]>,
    options: &RenderOptions,
) -> Result<String>
where
    R: AsRef<[T]>,
    T: Display,
    L: Display,
{
    let label_forms = labels
        .filter(|labels| !labels.is_empty())
        .map(|labels| display_forms(labels, RowRef::Labels))
        .transpose()?;
    let row_forms = rows
        .iter()
        .enumerate()
        .map(|(index, row)| display_forms(row.as_ref(), RowRef::Data(index)))
        .collect::<Result<Vec<_>>>()?;

    let widths = ColumnWidths::discover(&row_forms, label_forms.as_deref());

    if options.strict {
        check_lengths(&row_forms, label_forms.as_deref(), widths.len())?;
    }

    Ok(assemble(&row_forms, label_forms.as_deref(), &widths, options))
}

/// Convert one row to display forms, tagging failures with their position.
fn display_forms<T: Display>(cells: &[T], row: RowRef) -> Result<Vec<String>> {
    cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            display_form(cell).map_err(|_| TableError::Unrepresentable { row, column })
        })
        .collect()
}

fn check_lengths(
    rows: &[Vec<String>],
    labels: Option<&[String]>,
    expected: usize,
) -> Result<()> {
    let all_rows = labels
        .map(|labels| (RowRef::Labels, labels))
        .into_iter()
        .chain(
            rows.iter()
                .enumerate()
                .map(|(index, row)| (RowRef::Data(index), row.as_slice())),
        );

    for (row, cells) in all_rows {
        if cells.len() != expected {
            return Err(TableError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

fn assemble(
    rows: &[Vec<String>],
    labels: Option<&[String]>,
    widths: &ColumnWidths,
    options: &RenderOptions,
) -> String {
    let header_lines = if labels.is_some() { 2 } else { 0 };
    let mut lines = Vec::with_capacity(rows.len() + header_lines + 2);

    lines.push(border_line(BorderKind::Top, widths.as_slice()));
    if let Some(labels) = labels {
        lines.push(content_line(labels, widths, options.alignment));
        lines.push(border_line(BorderKind::Separator, widths.as_slice()));
    }
    for row in rows {
        lines.push(content_line(row, widths, options.alignment));
    }
    lines.push(border_line(BorderKind::Bottom, widths.as_slice()));

    lines.join("\n")
}
