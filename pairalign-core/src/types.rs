use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable symbol sequence with an optional identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub id: Option<String>,
    pub data: Vec<u8>,
}

impl Sequence {
    pub fn new<D: Into<Vec<u8>>>(data: D) -> Self {
        Self {
            id: None,
            data: data.into(),
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Display name, falling back to `default` when the sequence has no id
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.id.as_deref().unwrap_or(default)
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence::new(s.as_bytes())
    }
}

impl From<&[u8]> for Sequence {
    fn from(s: &[u8]) -> Self {
        Sequence::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Needleman-Wunsch, end to end over both sequences
    Global,
    /// Smith-Waterman, best-scoring pair of substrings
    Local,
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Global => write!(f, "global"),
            AlignmentMode::Local => write!(f, "local"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" | "needleman-wunsch" => Ok(AlignmentMode::Global),
            "local" | "sw" | "smith-waterman" => Ok(AlignmentMode::Local),
            other => Err(format!("unknown alignment mode: {}", other)),
        }
    }
}

/// Predecessor recorded for each DP cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Diagonal,
    /// From the cell above: consumes a symbol of B, gap in A
    Up,
    /// From the cell to the left: consumes a symbol of A, gap in B
    Left,
}

/// Alphabet element compared by the DP fill and written out by the renderer
pub trait Symbol: Copy + Eq + Send + Sync {
    fn to_char(self) -> char;
}

/// ASCII input aligns byte-wise
impl Symbol for u8 {
    #[inline]
    fn to_char(self) -> char {
        self as char
    }
}

impl Symbol for char {
    #[inline]
    fn to_char(self) -> char {
        self
    }
}

/// One column of an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentOp {
    Match { a: char, b: char },
    Mismatch { a: char, b: char },
    /// Symbol of B aligned against a gap in A
    GapInA { b: char },
    /// Symbol of A aligned against a gap in B
    GapInB { a: char },
}

impl AlignmentOp {
    pub fn is_gap(&self) -> bool {
        matches!(self, AlignmentOp::GapInA { .. } | AlignmentOp::GapInB { .. })
    }
}

/// Final rendered alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub mode: AlignmentMode,
    pub score: i32,
    /// Sequence A with gaps
    pub top: String,
    /// `|` match, `*` mismatch, blank for gaps
    pub marker: String,
    /// Sequence B with gaps
    pub bottom: String,
    /// Aligned span of A in symbols, 0-based half-open
    pub a_start: usize,
    pub a_end: usize,
    /// Aligned span of B in symbols, 0-based half-open
    pub b_start: usize,
    pub b_end: usize,
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl AlignmentResult {
    /// Number of alignment columns
    pub fn columns(&self) -> u32 {
        self.matches + self.mismatches + self.gaps
    }

    pub fn is_empty(&self) -> bool {
        self.columns() == 0
    }

    /// Percent identity over alignment columns
    pub fn identity(&self) -> f64 {
        let columns = self.columns();
        if columns == 0 {
            return 0.0;
        }
        (self.matches as f64 / columns as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("global".parse::<AlignmentMode>(), Ok(AlignmentMode::Global));
        assert_eq!("SW".parse::<AlignmentMode>(), Ok(AlignmentMode::Local));
        assert!("banded".parse::<AlignmentMode>().is_err());
        assert_eq!(AlignmentMode::Local.to_string(), "local");
    }

    #[test]
    fn test_sequence_accessors() {
        let seq = Sequence::from("ACGT").with_id("chr1");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.name_or("seq"), "chr1");
        assert!(Sequence::new(Vec::new()).is_empty());
        assert_eq!(Sequence::from("A").name_or("seqA"), "seqA");
    }

    #[test]
    fn test_symbol_chars() {
        assert_eq!(b'G'.to_char(), 'G');
        assert_eq!('é'.to_char(), 'é');
        assert!(AlignmentOp::GapInB { a: 'é' }.is_gap());
    }
}
