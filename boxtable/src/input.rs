//! Reading and parsing table data from JSON.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use boxtablelib::{CellValue, Table};
use serde::Deserialize;
use tracing::debug;

/// Path argument meaning "read from stdin"
pub const STDIN: &str = "-";

/// Accepted input shapes.
///
/// A bare array of rows is tried first: a `Table` would also accept a JSON
/// array (as a positional struct) and misread the first row as labels.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Input {
    Rows(Vec<Vec<CellValue>>),
    Table(Table),
}

impl From<Input> for Table {
    fn from(input: Input) -> Self {
        match input {
            Input::Rows(rows) => Table { labels: None, rows },
            Input::Table(table) => table,
        }
    }
}

/// Parse `{"labels": [...], "rows": [[...]]}` or `[[...], ...]`.
pub fn parse_table(raw: &str) -> serde_json::Result<Table> {
    let input: Input = serde_json::from_str(raw)?;
    Ok(input.into())
}

/// Read raw input from a file, or stdin for [`STDIN`].
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN {
        debug!("reading table data from stdin");
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read table data from stdin")?;
        Ok(raw)
    } else {
        debug!(path = source, "reading table data");
        fs::read_to_string(source).with_context(|| format!("failed to read '{}'", source))
    }
}

/// Read and parse a table from `source`.
pub fn load_table(source: &str) -> Result<Table> {
    let raw = read_source(source)?;
    let name = if source == STDIN { "stdin" } else { source };
    parse_table(&raw).with_context(|| format!("invalid table data in {}", name))
}
