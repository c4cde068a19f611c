use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pairalign_core::{AlignmentMode, ScoringOverrides};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod error;

use config::{Config, OutputFormat};
use error::{suggestions, CliError};

#[derive(Parser)]
#[command(name = "pairalign")]
#[command(about = "pairalign - Needleman-Wunsch and Smith-Waterman pairwise alignment")]
#[command(version)]
#[command(long_about = "
pairalign aligns two sequences with a linear gap penalty and prints the
alignment as three lines followed by the alignment score.

By default each input file holds a header line and the sequence on line 2.
Use --fasta for multi-line FASTA, FASTQ or gzipped input.

Examples:
  pairalign global seq1.fa seq2.fa
  pairalign local seq1.fa seq2.fa --match 3 --mismatch -3 --gap -2
  pairalign all-pairs genes.fa --mode local --threads 8
  pairalign config --example > pairalign.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Global alignment (Needleman-Wunsch) of two sequences
    Global(AlignArgs),

    /// Local alignment (Smith-Waterman) of two sequences
    Local(AlignArgs),

    /// Align every pair of records in a FASTA file and print a score table
    AllPairs {
        /// FASTA/FASTQ file with two or more records
        input: PathBuf,

        /// Alignment mode
        #[arg(long, default_value = "global")]
        mode: AlignmentMode,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Configuration helpers
    Config {
        /// Print an example configuration file
        #[arg(long)]
        example: bool,

        /// Write the example to this file instead of stdout
        #[arg(long, requires = "example")]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AlignArgs {
    /// First sequence file (top line of the alignment)
    pub seq_a: PathBuf,

    /// Second sequence file (bottom line of the alignment)
    pub seq_b: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Read inputs as FASTA/FASTQ (first record of each file)
    #[arg(long)]
    pub fasta: bool,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// Match reward
    #[arg(long = "match", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Mismatch penalty
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Per-base gap penalty
    #[arg(long, allow_negative_numbers = true)]
    pub gap: Option<i32>,
}

impl ScoringArgs {
    pub fn overrides(&self) -> ScoringOverrides {
        ScoringOverrides {
            match_score: self.match_score,
            mismatch: self.mismatch,
            gap: self.gap,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// Full context chain, followed by suggestions when the root is a `CliError`
fn describe_error(err: &anyhow::Error) -> String {
    let mut message = format!("{:#}", err);
    if let Some(extra) = err.downcast_ref::<CliError>().and_then(suggestions) {
        message.push_str(&extra);
    }
    message
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Config { example, out } = &cli.command {
        return commands::config::run(*example, out.as_deref());
    }

    let config = Config::load(cli.config.as_deref())?;
    let threads = cli.threads.unwrap_or(config.general.threads);
    configure_thread_pool(threads)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Global(args) => commands::align::run(AlignmentMode::Global, &args, &config, &mut out),
        Commands::Local(args) => commands::align::run(AlignmentMode::Local, &args, &config, &mut out),
        Commands::AllPairs { input, mode, scoring, format } => {
            let format = format.unwrap_or(config.general.format);
            commands::all_pairs::run(&input, mode, &scoring.overrides(), format, &config, &mut out)
        }
        Commands::Config { .. } => Ok(()),
    }
}

fn configure_thread_pool(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(CliError::config("thread count must be at least 1").into());
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| CliError::resource(format!("Failed to start {} worker threads: {}", threads, e)))?;
    log::debug!("Using {} worker threads", threads);
    Ok(())
}
