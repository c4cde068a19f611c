//! FASTA/FASTQ sequence input
//!
//! Parsing goes through needletail, so multi-line FASTA records and FASTQ
//! are both accepted. Files ending in `.gz` are decompressed with flate2.

use super::{SequenceSource, SourceError, SourceResult};
use crate::types::Sequence;
use flate2::read::GzDecoder;
use needletail::errors::{ParseError, ParseErrorKind};
use needletail::parse_fastx_reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct FastaSource;

impl FastaSource {
    /// Load every record in the file
    pub fn read_all(&self, path: &Path) -> SourceResult<Vec<Sequence>> {
        Self::read_records(path, usize::MAX)
    }

    /// Parse FASTA/FASTQ data from any readable source
    pub fn parse_reader<R: Read + Send>(reader: R, path: &Path) -> SourceResult<Vec<Sequence>> {
        Self::parse_records(reader, path, usize::MAX)
    }

    fn read_records(path: &Path, limit: usize) -> SourceResult<Vec<Sequence>> {
        let file = File::open(path)?;
        if path.extension().map_or(false, |ext| ext == "gz") {
            Self::parse_records(BufReader::new(GzDecoder::new(file)), path, limit)
        } else {
            Self::parse_records(BufReader::new(file), path, limit)
        }
    }

    /// Parse at most `limit` records; later records are never read
    fn parse_records<R: Read + Send>(reader: R, path: &Path, limit: usize) -> SourceResult<Vec<Sequence>> {
        let parse_error = |e: ParseError| SourceError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut fastx_reader = parse_fastx_reader(reader).map_err(|e| {
            if matches!(e.kind, ParseErrorKind::EmptyFile) {
                SourceError::EmptyFile {
                    path: path.to_path_buf(),
                }
            } else {
                parse_error(e)
            }
        })?;

        let mut sequences = Vec::new();
        while sequences.len() < limit {
            let record = match fastx_reader.next() {
                Some(record) => record.map_err(parse_error)?,
                None => break,
            };
            let id = String::from_utf8_lossy(record.id());
            let id = id.split_whitespace().next().unwrap_or_default().to_string();
            sequences.push(Sequence::new(record.seq().into_owned()).with_id(id));
        }

        if sequences.is_empty() {
            return Err(SourceError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Ok(sequences)
    }
}

impl SequenceSource for FastaSource {
    /// First record of the file
    fn read_sequence(&self, path: &Path) -> SourceResult<Sequence> {
        Self::read_records(path, 1)?
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::EmptyFile {
                path: path.to_path_buf(),
            })
    }

    fn name(&self) -> &'static str {
        "fasta"
    }
}
