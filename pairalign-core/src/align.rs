//! Alignment driver
//!
//! Runs matrix fill, traceback and rendering for one pair, or for many
//! pairs on the rayon thread pool. Every call owns its own matrices.

use crate::error::AlignResult;
use crate::matrix::DpMatrixBuilder;
use crate::render::AlignmentRenderer;
use crate::scoring::ScoringScheme;
use crate::traceback::PathTracer;
use crate::types::{AlignmentMode, AlignmentResult, Sequence, Symbol};
use log::debug;
use rayon::prelude::*;

/// Align `seq_a` against `seq_b`
pub fn align(
    seq_a: &[u8],
    seq_b: &[u8],
    scoring: ScoringScheme,
    mode: AlignmentMode,
) -> AlignResult<AlignmentResult> {
    Aligner::new(scoring, mode).align(seq_a, seq_b)
}

/// Result of one entry of an all-pairs run
#[derive(Debug, Clone)]
pub struct PairAlignment {
    /// Index of sequence A in the input slice
    pub a: usize,
    /// Index of sequence B in the input slice
    pub b: usize,
    pub result: AlignResult<AlignmentResult>,
}

/// Pairwise aligner bound to one scoring scheme and mode
#[derive(Debug, Clone, Copy)]
pub struct Aligner {
    scoring: ScoringScheme,
    mode: AlignmentMode,
}

impl Aligner {
    pub fn new(scoring: ScoringScheme, mode: AlignmentMode) -> Self {
        Self { scoring, mode }
    }

    /// Aligner using the default scheme for `mode`
    pub fn with_defaults(mode: AlignmentMode) -> Self {
        Self::new(ScoringScheme::default_for(mode), mode)
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Align two UTF-8 encoded sequences symbol by symbol.
    ///
    /// ASCII input is aligned byte-wise. Anything else is decoded to
    /// `char`s first so a multi-byte character occupies one column.
    pub fn align(&self, seq_a: &[u8], seq_b: &[u8]) -> AlignResult<AlignmentResult> {
        if seq_a.is_ascii() && seq_b.is_ascii() {
            return self.align_symbols(seq_a, seq_b);
        }
        let a: Vec<char> = String::from_utf8_lossy(seq_a).chars().collect();
        let b: Vec<char> = String::from_utf8_lossy(seq_b).chars().collect();
        self.align_symbols(&a, &b)
    }

    /// Align pre-split symbol sequences
    pub fn align_symbols<S: Symbol>(&self, seq_a: &[S], seq_b: &[S]) -> AlignResult<AlignmentResult> {
        let tables = DpMatrixBuilder::new(self.scoring, self.mode).build(seq_a, seq_b)?;
        let path = PathTracer::trace(&tables, seq_a, seq_b);
        let result = AlignmentRenderer::render(&path, self.mode);
        debug!(
            "{} alignment of {} x {} symbols: score {}, {} columns",
            self.mode,
            seq_a.len(),
            seq_b.len(),
            result.score,
            result.columns()
        );
        Ok(result)
    }

    pub fn align_sequences(&self, a: &Sequence, b: &Sequence) -> AlignResult<AlignmentResult> {
        self.align(a.as_bytes(), b.as_bytes())
    }

    /// Align independent pairs in parallel, preserving input order
    pub fn align_batch(&self, pairs: &[(Sequence, Sequence)]) -> Vec<AlignResult<AlignmentResult>> {
        pairs
            .par_iter()
            .map(|(a, b)| self.align_sequences(a, b))
            .collect()
    }

    /// Align every unordered pair `(i, j)` with `i < j`
    pub fn align_all_pairs(&self, sequences: &[Sequence]) -> Vec<PairAlignment> {
        let pairs: Vec<(usize, usize)> = (0..sequences.len())
            .flat_map(|i| (i + 1..sequences.len()).map(move |j| (i, j)))
            .collect();
        debug!("Aligning {} pairs from {} sequences", pairs.len(), sequences.len());

        pairs
            .into_par_iter()
            .map(|(a, b)| PairAlignment {
                a,
                b,
                result: self.align_sequences(&sequences[a], &sequences[b]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_textbook_pair() {
        let result = align(
            b"GATTACA",
            b"GCATGCU",
            ScoringScheme::global_default(),
            AlignmentMode::Global,
        )
        .unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.top, "G-ATTACA");
        assert_eq!(result.marker, "| | |*|*");
        assert_eq!(result.bottom, "GCA-TGCU");
        assert_eq!((result.a_start, result.a_end), (0, 7));
    }

    #[test]
    fn test_local_textbook_pair() {
        let result = Aligner::with_defaults(AlignmentMode::Local)
            .align(b"TGTTACGG", b"GGTTGACTA")
            .unwrap();
        assert_eq!(result.score, 13);
        assert_eq!(result.top, "GTT-AC");
        assert_eq!(result.marker, "||| ||");
        assert_eq!(result.bottom, "GTTGAC");
        assert_eq!((result.a_start, result.a_end), (1, 6));
        assert_eq!((result.b_start, result.b_end), (1, 7));
    }

    #[test]
    fn test_multibyte_symbols() {
        let aligner = Aligner::with_defaults(AlignmentMode::Global);

        let result = aligner.align("é".as_bytes(), b"e").unwrap();
        assert_eq!(result.score, -1);
        assert_eq!((result.top.as_str(), result.marker.as_str(), result.bottom.as_str()), ("é", "*", "e"));

        let result = aligner.align("éé".as_bytes(), "éé".as_bytes()).unwrap();
        assert_eq!(result.score, 2);
        assert_eq!(result.columns(), 2);

        let result = aligner.align("aé".as_bytes(), b"a").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.top, "aé");
        assert_eq!(result.marker, "| ");
        assert_eq!(result.bottom, "a-");
        assert_eq!((result.a_start, result.a_end), (0, 2));
    }

    #[test]
    fn test_batch_preserves_order() {
        let aligner = Aligner::with_defaults(AlignmentMode::Global);
        let pairs = vec![
            (Sequence::from("ACGT"), Sequence::from("ACGT")),
            (Sequence::from(""), Sequence::from("ACG")),
            (Sequence::from("AGT"), Sequence::from("AT")),
        ];
        let scores: Vec<i32> = aligner
            .align_batch(&pairs)
            .into_iter()
            .map(|r| r.unwrap().score)
            .collect();
        assert_eq!(scores, vec![4, -3, 1]);
    }

    #[test]
    fn test_all_pairs_indices() {
        let aligner = Aligner::with_defaults(AlignmentMode::Local);
        let sequences = vec![
            Sequence::from("ACGT"),
            Sequence::from("ACGA"),
            Sequence::from("TTTT"),
        ];
        let results = aligner.align_all_pairs(&sequences);
        let indices: Vec<(usize, usize)> = results.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(indices, vec![(0, 1), (0, 2), (1, 2)]);
        assert!(results.iter().all(|p| p.result.as_ref().unwrap().score >= 0));
    }

    #[test]
    fn test_single_sequence_has_no_pairs() {
        let aligner = Aligner::with_defaults(AlignmentMode::Global);
        assert!(aligner.align_all_pairs(&[Sequence::from("ACGT")]).is_empty());
    }
}
