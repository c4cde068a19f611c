use super::sink_for;
use crate::config::Config;
use crate::error::CliError;
use crate::AlignArgs;
use anyhow::{Context, Result};
use pairalign_core::io::{FastaSource, SequenceSource, TwoLineSource};
use pairalign_core::{Aligner, AlignmentMode, Sequence};
use std::io::Write;
use std::path::Path;

pub fn run<W: Write>(mode: AlignmentMode, args: &AlignArgs, config: &Config, out: &mut W) -> Result<()> {
    let scoring = config.scoring_for(mode, &args.scoring.overrides())?;
    let source: Box<dyn SequenceSource> = if args.fasta || config.general.fasta {
        Box::new(FastaSource)
    } else {
        Box::new(TwoLineSource)
    };

    let seq_a = read_sequence(source.as_ref(), &args.seq_a)?;
    let seq_b = read_sequence(source.as_ref(), &args.seq_b)?;
    log::info!(
        "{} alignment: {} ({} bp) vs {} ({} bp), match {} mismatch {} gap {}",
        mode,
        seq_a.name_or("A"),
        seq_a.len(),
        seq_b.name_or("B"),
        seq_b.len(),
        scoring.match_score(),
        scoring.mismatch(),
        scoring.gap()
    );

    let result = Aligner::new(scoring, mode)
        .align_sequences(&seq_a, &seq_b)
        .map_err(CliError::from)?;
    if result.is_empty() && mode == AlignmentMode::Local {
        log::warn!("No local alignment found");
    }

    let format = args.format.unwrap_or(config.general.format);
    sink_for(format, out)
        .write_result(&result)
        .context("Failed to write alignment")?;
    Ok(())
}

fn read_sequence(source: &dyn SequenceSource, path: &Path) -> Result<Sequence> {
    log::debug!("Reading {} with the {} reader", path.display(), source.name());
    source
        .read_sequence(path)
        .map_err(|e| CliError::from_source(e, path.to_path_buf()).into())
}
