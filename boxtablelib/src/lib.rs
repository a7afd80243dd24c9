//! # boxtablelib
//!
//! Render rows of displayable values as fixed-width text tables drawn with
//! box-drawing characters.
//!
//! ## Overview
//!
//! Given rows of cells, and optionally a row of column labels, the renderer
//! produces one multi-line `String`:
//!
//! - **Column widths**: each column is as wide as its widest cell, labels
//!   included
//! - **Borders**: `┌ ┬ ┐` on top, `├ ┼ ┤` under the labels, `└ ┴ ┘` at the
//!   bottom
//! - **Alignment**: left-aligned or centered, uniformly for every cell
//!
//! Any `T: Display` can be a cell. For heterogeneous rows, use [`CellValue`]
//! or the owned [`Table`] model.
//!
//! Rows may have different lengths. Each column's width comes from whichever
//! rows reach it, and shorter rows render as shorter lines. Use
//! [`RenderOptions::strict`] to reject such input instead.
//!
//! ## Example
//!
//! ```rust
//! use boxtablelib::{render, CellValue, RenderOptions, Table};
//!
//! // Plain slices of displayable values
//! let rows = vec![vec!["Lemon"], vec!["Sebastiaan"]];
//! let table = render(&rows, None::<&[&str]>, false).unwrap();
//! assert_eq!(table, "┌────────────┐\n│ Lemon      │\n│ Sebastiaan │\n└────────────┘");
//!
//! // Mixed values through the owned model
//! let table = Table::from_rows(vec![
//!     vec![CellValue::from("Joe"), CellValue::from(-12)],
//!     vec![CellValue::from("Sebastiaan"), CellValue::from(183285.1)],
//! ])
//! .with_labels(["User", "Messages"]);
//!
//! let rendered = table.render(&RenderOptions::new().centered(true)).unwrap();
//! assert_eq!(rendered.lines().count(), 6);
//! ```

pub mod border;
pub mod cell;
pub mod error;
pub mod layout;
pub mod options;
pub mod render;
pub mod table;

pub use border::BorderKind;
pub use cell::{display_form, display_width, CellValue};
pub use error::{RowRef, TableError};
pub use layout::ColumnWidths;
pub use options::{Alignment, RenderOptions};
pub use render::{render, render_with};
pub use table::Table;

/// Result type for boxtablelib operations
pub type Result<T> = std::result::Result<T, TableError>;
