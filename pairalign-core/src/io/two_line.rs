use super::{SequenceSource, SourceError, SourceResult};
use crate::types::Sequence;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the sequence body from the second line of a header/sequence file.
///
/// The first line is kept as the sequence id when it looks like a FASTA
/// header. Trailing whitespace on the sequence line is stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoLineSource;

impl TwoLineSource {
    pub fn read_from<R: BufRead>(&self, reader: R, path: &Path) -> SourceResult<Sequence> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(SourceError::MissingSequenceLine {
                    path: path.to_path_buf(),
                })
            }
        };
        let body = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(SourceError::MissingSequenceLine {
                    path: path.to_path_buf(),
                })
            }
        };

        let sequence = Sequence::new(body.trim_end().as_bytes());
        Ok(match header_id(&header) {
            Some(id) => sequence.with_id(id),
            None => sequence,
        })
    }
}

impl SequenceSource for TwoLineSource {
    fn read_sequence(&self, path: &Path) -> SourceResult<Sequence> {
        let file = File::open(path)?;
        self.read_from(BufReader::new(file), path)
    }

    fn name(&self) -> &'static str {
        "two-line"
    }
}

fn header_id(header: &str) -> Option<&str> {
    header
        .strip_prefix('>')
        .or_else(|| header.strip_prefix('@'))
        .and_then(|rest| rest.split_whitespace().next())
}
