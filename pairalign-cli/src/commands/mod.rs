//! Command implementations for the pairalign CLI

pub mod align;
pub mod all_pairs;
pub mod config;

use crate::config::OutputFormat;
use pairalign_core::io::{JsonSink, ResultSink, TextSink};
use std::io::Write;

/// Result sink for the requested output format
pub(crate) fn sink_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn ResultSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}
