//! Optimal-path reconstruction over filled DP matrices.

use crate::matrix::DpTables;
use crate::types::{AlignmentMode, AlignmentOp, Direction, Symbol};
use log::{trace, warn};

/// Path recovered from the traceback matrix.
///
/// `ops` is in walk order, i.e. from the end of the alignment back to its
/// start. Cell coordinates are `(row, col)` = `(position in B, position in A)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedPath {
    pub ops: Vec<AlignmentOp>,
    pub score: i32,
    /// Cell where the walk began (alignment end)
    pub end_cell: (usize, usize),
    /// Cell where the walk stopped (alignment start, exclusive of that cell)
    pub start_cell: (usize, usize),
}

impl TracedPath {
    /// Operations in left-to-right alignment order
    pub fn ops_in_order(&self) -> impl Iterator<Item = &AlignmentOp> {
        self.ops.iter().rev()
    }
}

pub struct PathTracer;

impl PathTracer {
    /// Walk `tables` back from the mode's start cell.
    ///
    /// Global walks from `(n, m)` to `(0, 0)`. Local walks from the first
    /// maximal cell and stops on the first cell scoring zero.
    pub fn trace<S: Symbol>(tables: &DpTables, seq_a: &[S], seq_b: &[S]) -> TracedPath {
        let scores = &tables.scores;
        let (mut i, mut j, score) = match tables.mode {
            AlignmentMode::Global => {
                let (n, m) = (scores.rows() - 1, scores.cols() - 1);
                (n, m, scores.get(n, m))
            }
            AlignmentMode::Local => scores.max_cell(),
        };
        let end_cell = (i, j);
        trace!("Traceback from ({}, {}) with score {}", i, j, score);

        let mut ops = Vec::with_capacity(i + j);
        loop {
            let keep_going = match tables.mode {
                AlignmentMode::Global => i > 0 || j > 0,
                AlignmentMode::Local => scores.get(i, j) > 0,
            };
            if !keep_going {
                break;
            }

            match tables.traceback.get(i, j) {
                Direction::Diagonal if i > 0 && j > 0 => {
                    let (a, b) = (seq_a[j - 1], seq_b[i - 1]);
                    let (ca, cb) = (a.to_char(), b.to_char());
                    ops.push(if a == b {
                        AlignmentOp::Match { a: ca, b: cb }
                    } else {
                        AlignmentOp::Mismatch { a: ca, b: cb }
                    });
                    i -= 1;
                    j -= 1;
                }
                Direction::Up if i > 0 => {
                    ops.push(AlignmentOp::GapInA { b: seq_b[i - 1].to_char() });
                    i -= 1;
                }
                Direction::Left if j > 0 => {
                    ops.push(AlignmentOp::GapInB { a: seq_a[j - 1].to_char() });
                    j -= 1;
                }
                direction => {
                    warn!("Traceback stopped at ({}, {}) on {:?}", i, j, direction);
                    break;
                }
            }
        }

        TracedPath {
            ops,
            score,
            end_cell,
            start_cell: (i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DpMatrixBuilder;
    use crate::scoring::ScoringScheme;

    fn trace<S: Symbol>(a: &[S], b: &[S], scoring: ScoringScheme, mode: AlignmentMode) -> TracedPath {
        let tables = DpMatrixBuilder::new(scoring, mode).build(a, b).unwrap();
        PathTracer::trace(&tables, a, b)
    }

    #[test]
    fn test_global_walk_reaches_origin() {
        let path = trace(b"ACGTAC", b"AC", ScoringScheme::global_default(), AlignmentMode::Global);
        assert_eq!(path.score, -2);
        assert_eq!(path.start_cell, (0, 0));
        assert_eq!(path.end_cell, (2, 6));
        assert_eq!(path.ops.len(), 6);
        // Walk order: the trailing "AC" matches come first
        assert_eq!(path.ops[0], AlignmentOp::Match { a: 'C', b: 'C' });
        assert_eq!(path.ops[5], AlignmentOp::GapInB { a: 'A' });
    }

    #[test]
    fn test_global_walk_bounded_for_unequal_lengths() {
        let path = trace(b"AC", b"ACGTAC", ScoringScheme::global_default(), AlignmentMode::Global);
        assert_eq!(path.ops.len(), 6);
        assert_eq!(path.ops.iter().filter(|op| op.is_gap()).count(), 4);
        assert_eq!(path.start_cell, (0, 0));
    }

    #[test]
    fn test_up_then_left_on_mismatch() {
        // mismatch -3 loses to up (-2); up wins the tie with left
        let scoring = ScoringScheme::new(1, -3, -1).unwrap();
        let path = trace(b"A", b"G", scoring, AlignmentMode::Global);
        assert_eq!(path.score, -2);
        assert_eq!(
            path.ops,
            vec![AlignmentOp::GapInA { b: 'G' }, AlignmentOp::GapInB { a: 'A' }]
        );
    }

    #[test]
    fn test_local_walk_stops_at_zero() {
        let path = trace(b"ACGTTT", b"CGT", ScoringScheme::local_default(), AlignmentMode::Local);
        assert_eq!(path.score, 9);
        assert_eq!(path.end_cell, (3, 4));
        assert_eq!(path.start_cell, (0, 1));
        assert!(path.ops.iter().all(|op| matches!(op, AlignmentOp::Match { .. })));
    }

    #[test]
    fn test_local_without_positive_cell_is_empty() {
        let path = trace(b"AAAA", b"TTTT", ScoringScheme::local_default(), AlignmentMode::Local);
        assert_eq!(path.score, 0);
        assert!(path.ops.is_empty());
        assert_eq!(path.start_cell, path.end_cell);
    }

    #[test]
    fn test_multibyte_symbol_is_one_column() {
        let a: Vec<char> = "aé".chars().collect();
        let b: Vec<char> = "a".chars().collect();
        let path = trace(&a, &b, ScoringScheme::global_default(), AlignmentMode::Global);
        assert_eq!(path.score, 0);
        assert_eq!(
            path.ops,
            vec![AlignmentOp::GapInB { a: 'é' }, AlignmentOp::Match { a: 'a', b: 'a' }]
        );
        assert_eq!(path.end_cell, (1, 2));
    }

    #[test]
    fn test_ops_in_order_reverses_walk() {
        let path = trace(b"AGT", b"AT", ScoringScheme::global_default(), AlignmentMode::Global);
        let ordered: Vec<_> = path.ops_in_order().copied().collect();
        assert_eq!(
            ordered,
            vec![
                AlignmentOp::Match { a: 'A', b: 'A' },
                AlignmentOp::GapInB { a: 'G' },
                AlignmentOp::Match { a: 'T', b: 'T' },
            ]
        );
    }
}
