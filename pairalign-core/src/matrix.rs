//! DP score and traceback matrices.
//!
//! Rows run over sequence B (length `n`), columns over sequence A (length
//! `m`). Both matrices are `(n + 1) x (m + 1)` and stored row-major in a
//! single flat buffer owned by one alignment call.

use crate::error::{AlignError, AlignResult};
use crate::scoring::ScoringScheme;
use crate::types::{AlignmentMode, Direction, Symbol};
use log::debug;

/// Dense row-major grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Copy> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    /// Row slice, mainly for debugging output
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

pub type ScoreMatrix = Grid<i32>;
pub type TracebackMatrix = Grid<Direction>;

impl ScoreMatrix {
    /// Highest-scoring cell, taking the first occurrence in row-major order
    pub fn max_cell(&self) -> (usize, usize, i32) {
        let mut best = (0, 0, self.get(0, 0));
        for (idx, &value) in self.cells.iter().enumerate() {
            if value > best.2 {
                best = (idx / self.cols, idx % self.cols, value);
            }
        }
        best
    }
}

/// Filled score and traceback matrices for one sequence pair
#[derive(Debug, Clone)]
pub struct DpTables {
    pub mode: AlignmentMode,
    pub scores: ScoreMatrix,
    pub traceback: TracebackMatrix,
}

/// Fills DP matrices for a given scoring scheme and mode
#[derive(Debug, Clone, Copy)]
pub struct DpMatrixBuilder {
    scoring: ScoringScheme,
    mode: AlignmentMode,
}

impl DpMatrixBuilder {
    pub fn new(scoring: ScoringScheme, mode: AlignmentMode) -> Self {
        Self { scoring, mode }
    }

    /// Fill the matrices for `seq_a` (columns) against `seq_b` (rows)
    pub fn build<S: Symbol>(&self, seq_a: &[S], seq_b: &[S]) -> AlignResult<DpTables> {
        let m = seq_a.len();
        let n = seq_b.len();
        check_dimensions(n, m, &self.scoring)?;

        let rows = n + 1;
        let cols = m + 1;
        debug!("Filling {} DP matrix: {} x {}", self.mode, rows, cols);

        let mut scores = ScoreMatrix::new(rows, cols);
        let mut traceback = TracebackMatrix::new(rows, cols);
        let gap = self.scoring.gap();

        if self.mode == AlignmentMode::Global {
            for j in 1..cols {
                scores.set(0, j, j as i32 * gap);
                traceback.set(0, j, Direction::Left);
            }
            for i in 1..rows {
                scores.set(i, 0, i as i32 * gap);
                traceback.set(i, 0, Direction::Up);
            }
        }

        for i in 1..rows {
            let b = seq_b[i - 1];
            for j in 1..cols {
                let diagonal = scores.get(i - 1, j - 1) + self.scoring.substitution(b, seq_a[j - 1]);
                let up = scores.get(i - 1, j) + gap;
                let left = scores.get(i, j - 1) + gap;

                let (mut value, direction) = select_predecessor(diagonal, up, left);
                if self.mode == AlignmentMode::Local && value < 0 {
                    value = 0;
                }
                scores.set(i, j, value);
                traceback.set(i, j, direction);
            }
        }

        Ok(DpTables {
            mode: self.mode,
            scores,
            traceback,
        })
    }
}

/// Tie-break order: diagonal wins all ties, then up wins over left.
#[inline]
pub fn select_predecessor(diagonal: i32, up: i32, left: i32) -> (i32, Direction) {
    if diagonal >= up && diagonal >= left {
        (diagonal, Direction::Diagonal)
    } else if up >= left && up > diagonal {
        (up, Direction::Up)
    } else {
        (left, Direction::Left)
    }
}

fn check_dimensions(n: usize, m: usize, scoring: &ScoringScheme) -> AlignResult<()> {
    let cells = n
        .checked_add(1)
        .zip(m.checked_add(1))
        .and_then(|(rows, cols)| rows.checked_mul(cols));
    if cells.is_none() {
        return Err(AlignError::invalid_input(format!(
            "DP matrix of {} x {} cells is too large",
            n, m
        )));
    }

    let worst_case = (n as u128 + m as u128) * scoring.max_step_magnitude() as u128;
    if worst_case > i32::MAX as u128 {
        return Err(AlignError::invalid_input(format!(
            "sequences of length {} and {} can overflow the score range",
            m, n
        )));
    }
    Ok(())
}
