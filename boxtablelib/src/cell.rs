//! Cell values and their display forms.
//!
//! Any `T: Display` can sit in a table cell: its display form is whatever
//! `Display` writes. [`CellValue`] is an owned, serializable cell type for
//! callers that need heterogeneous rows (numbers next to text) or that load
//! table data from JSON.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Convert a value into its display form.
///
/// Unlike `ToString::to_string`, a failing `Display` implementation is
/// reported as an error instead of a panic.
pub fn display_form<T: fmt::Display + ?Sized>(value: &T) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", value)?;
    Ok(out)
}

/// Width of a display form, counted in `char`s.
///
/// This is not terminal cell width: wide and combining characters count
/// as one each.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// A single owned table cell.
///
/// Deserializes untagged, so JSON `"a"`, `12`, `1.5`, `true` and `null`
/// map straight onto the variants. Integers above `i64::MAX` land in
/// `Unsigned` rather than losing precision as a float.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Unsigned(v) => write!(f, "{}", v),
            CellValue::Float(v) => write_float(f, *v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Write a float the way most people expect to read one in a table:
/// integral values keep a trailing `.0`, very large or very small
/// magnitudes switch to exponent notation with a signed, two-digit exponent.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{}e{}{:0>2}", mantissa, sign, digits);
    }

    if value.fract() == 0.0 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Float(value as f64)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    CellValue::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Unsigned(value),
        }
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::from(value as u64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
