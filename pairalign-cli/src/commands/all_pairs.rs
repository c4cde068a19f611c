use crate::config::{Config, OutputFormat};
use crate::error::CliError;
use anyhow::{Context, Result};
use pairalign_core::io::FastaSource;
use pairalign_core::{Aligner, AlignmentMode, AlignmentResult, ScoringOverrides, Sequence};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// One JSON line of all-pairs output
#[derive(Serialize)]
struct PairRecord<'a> {
    seq_a: &'a str,
    seq_b: &'a str,
    #[serde(flatten)]
    result: &'a AlignmentResult,
}

pub fn run<W: Write>(
    input: &Path,
    mode: AlignmentMode,
    overrides: &ScoringOverrides,
    format: OutputFormat,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let scoring = config.scoring_for(mode, overrides)?;
    let sequences = FastaSource.read_all(input).map_err(|e| CliError::from_source(e, input.to_path_buf()))?;
    if sequences.len() < 2 {
        return Err(CliError::invalid_format(format!(
            "{} holds {} record(s), all-pairs needs at least 2",
            input.display(),
            sequences.len()
        ))
        .into());
    }

    let names = record_names(&sequences);
    log::info!(
        "Aligning {} pairs from {} records ({} mode)",
        sequences.len() * (sequences.len() - 1) / 2,
        sequences.len(),
        mode
    );

    let start = Instant::now();
    let pairs = Aligner::new(scoring, mode).align_all_pairs(&sequences);
    log::info!("Aligned {} pairs in {:.2?}", pairs.len(), start.elapsed());

    if format == OutputFormat::Text {
        writeln!(out, "seq_a\tseq_b\tscore\tidentity\tcolumns")?;
    }
    for pair in pairs {
        let result = pair
            .result
            .map_err(CliError::from)
            .with_context(|| format!("Failed to align {} against {}", names[pair.a], names[pair.b]))?;
        match format {
            OutputFormat::Text => writeln!(
                out,
                "{}\t{}\t{}\t{:.2}\t{}",
                names[pair.a],
                names[pair.b],
                result.score,
                result.identity(),
                result.columns()
            )?,
            OutputFormat::Json => {
                let record = PairRecord {
                    seq_a: &names[pair.a],
                    seq_b: &names[pair.b],
                    result: &result,
                };
                let line = serde_json::to_string(&record).context("Failed to encode pair result")?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Record ids, falling back to 1-based positions for unnamed records
fn record_names(sequences: &[Sequence]) -> Vec<String> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, s)| match &s.id {
            Some(id) => id.clone(),
            None => format!("seq{}", i + 1),
        })
        .collect()
}
