//! pairalign core library
//!
//! Needleman-Wunsch (global) and Smith-Waterman (local) pairwise alignment
//! with linear gap penalties: DP matrix fill, traceback and rendering, plus
//! the sequence readers and result writers used by the CLI.

pub mod align;
pub mod error;
pub mod io;
pub mod matrix;
pub mod render;
pub mod scoring;
pub mod traceback;
pub mod types;

// Re-export commonly used types and functions
pub use align::{align, Aligner, PairAlignment};
pub use error::{AlignError, AlignResult};
pub use matrix::{DpMatrixBuilder, DpTables, ScoreMatrix, TracebackMatrix};
pub use render::AlignmentRenderer;
pub use scoring::{ScoringOverrides, ScoringScheme, MAX_SCORE_MAGNITUDE};
pub use traceback::{PathTracer, TracedPath};
pub use types::{AlignmentMode, AlignmentOp, AlignmentResult, Direction, Sequence, Symbol};

/// Version information for the pairalign core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
