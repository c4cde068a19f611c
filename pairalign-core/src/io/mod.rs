//! Sequence input and result output.
//!
//! Neither is used by the alignment engine itself; they are the collaborators
//! the command-line layer wires around it.

pub mod fasta;
pub mod sink;
pub mod two_line;

use crate::types::Sequence;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use fasta::FastaSource;
pub use sink::{JsonSink, ResultSink, TextSink};
pub use two_line::TwoLineSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No sequence line found in {path} (expected the sequence on line 2)")]
    MissingSequenceLine { path: PathBuf },
    #[error("Empty file or no sequences found: {path}")]
    EmptyFile { path: PathBuf },
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Something that can load one sequence from a file
pub trait SequenceSource {
    fn read_sequence(&self, path: &Path) -> SourceResult<Sequence>;
    fn name(&self) -> &'static str;
}
