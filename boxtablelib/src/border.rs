//! Box-drawing glyphs and border line synthesis.

/// Horizontal rule glyph
pub const HORIZONTAL: char = '─';
/// Vertical rule glyph, used for cell separators and row edges
pub const VERTICAL: char = '│';

/// The three kinds of horizontal border in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    /// Above the first line
    Top,
    /// Between the label row and the data rows
    Separator,
    /// Below the last line
    Bottom,
}

impl BorderKind {
    /// Glyphs as (left end, column junction, right end)
    pub fn glyphs(self) -> (char, char, char) {
        match self {
            BorderKind::Top => ('┌', '┬', '┐'),
            BorderKind::Separator => ('├', '┼', '┤'),
            BorderKind::Bottom => ('└', '┴', '┘'),
        }
    }
}

/// Build a border line for columns of the given content widths.
///
/// Each column gets `width + 2` horizontal glyphs, one extra on each side
/// for the padding space around cell content.
pub fn border_line(kind: BorderKind, widths: &[usize]) -> String {
    let (left, junction, right) = kind.glyphs();
    let segments: Vec<String> = widths
        .iter()
        .map(|width| HORIZONTAL.to_string().repeat(width + 2))
        .collect();

    let mut line = String::new();
    line.push(left);
    line.push_str(&segments.join(&junction.to_string()));
    line.push(right);
    line
}
