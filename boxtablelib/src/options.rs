//! Options controlling how a table is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How cell content is placed within its column.
///
/// Applies uniformly to every cell, labels included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// All padding goes to the right of the content
    #[default]
    Left,
    /// Padding is split, with the odd space going to the right
    Centered,
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" | "centered" => Ok(Alignment::Centered),
            _ => Err(format!("Unknown alignment: {}", s)),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Centered => write!(f, "centered"),
        }
    }
}

/// Options for rendering a table.
///
/// # Example
///
/// ```rust
/// use boxtablelib::{Alignment, RenderOptions};
///
/// let options = RenderOptions::new().centered(true).strict(true);
/// assert_eq!(options.alignment, Alignment::Centered);
/// assert!(options.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Cell alignment
    pub alignment: Alignment,
    /// Reject rows (and labels) whose length differs from the column count.
    /// Ragged input is accepted when this is off.
    pub strict: bool,
}

impl RenderOptions {
    /// Left-aligned, permissive options (default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder: center (true) or left-align (false) every cell
    pub fn centered(mut self, centered: bool) -> Self {
        self.alignment = if centered {
            Alignment::Centered
        } else {
            Alignment::Left
        };
        self
    }

    /// Builder: enable or disable row length validation
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
