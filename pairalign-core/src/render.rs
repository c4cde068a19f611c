use crate::traceback::TracedPath;
use crate::types::{AlignmentMode, AlignmentOp, AlignmentResult};

pub const GAP_SYMBOL: char = '-';
pub const MATCH_MARKER: char = '|';
pub const MISMATCH_MARKER: char = '*';
pub const GAP_MARKER: char = ' ';

/// Turns a traced path into three display lines plus summary counts
pub struct AlignmentRenderer;

impl AlignmentRenderer {
    pub fn render(path: &TracedPath, mode: AlignmentMode) -> AlignmentResult {
        let columns = path.ops.len();
        let mut top = String::with_capacity(columns);
        let mut marker = String::with_capacity(columns);
        let mut bottom = String::with_capacity(columns);
        let (mut matches, mut mismatches, mut gaps) = (0u32, 0u32, 0u32);

        for op in path.ops_in_order() {
            let (t, mk, b) = match *op {
                AlignmentOp::Match { a, b } => {
                    matches += 1;
                    (a, MATCH_MARKER, b)
                }
                AlignmentOp::Mismatch { a, b } => {
                    mismatches += 1;
                    (a, MISMATCH_MARKER, b)
                }
                AlignmentOp::GapInA { b } => {
                    gaps += 1;
                    (GAP_SYMBOL, GAP_MARKER, b)
                }
                AlignmentOp::GapInB { a } => {
                    gaps += 1;
                    (a, GAP_MARKER, GAP_SYMBOL)
                }
            };
            top.push(t);
            marker.push(mk);
            bottom.push(b);
        }

        AlignmentResult {
            mode,
            score: path.score,
            top,
            marker,
            bottom,
            a_start: path.start_cell.1,
            a_end: path.end_cell.1,
            b_start: path.start_cell.0,
            b_end: path.end_cell.0,
            matches,
            mismatches,
            gaps,
        }
    }
}
