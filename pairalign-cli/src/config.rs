//! Configuration handling for the pairalign CLI
//!
//! Supports loading configuration from pairalign.toml files with CLI argument
//! overrides. Precedence is CLI flags, then the file, then built-in defaults.

use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use pairalign_core::{AlignmentMode, ScoringOverrides, ScoringScheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "pairalign.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three alignment lines and the score
    Text,
    /// One JSON object per alignment
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scoring overrides for global alignment
    #[serde(default)]
    pub global: ScoringOverrides,

    /// Scoring overrides for local alignment
    #[serde(default)]
    pub local: ScoringOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default number of threads for all-pairs alignment
    #[serde(default = "default_threads")]
    pub threads: usize,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Read inputs as FASTA/FASTQ instead of the second-line convention
    #[serde(default)]
    pub fasta: bool,
}

fn default_threads() -> usize { num_cpus::get() }
fn default_format() -> OutputFormat { OutputFormat::Text }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            format: default_format(),
            fasta: false,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("Using default configuration");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CliError::file_not_found(path.to_path_buf())
            } else {
                CliError::io(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Scoring for `mode`: `cli` overrides the file, which overrides the mode defaults
    pub fn scoring_for(&self, mode: AlignmentMode, cli: &ScoringOverrides) -> CliResult<ScoringScheme> {
        let file = match mode {
            AlignmentMode::Global => &self.global,
            AlignmentMode::Local => &self.local,
        };
        let merged = cli.layered_over(file);
        Ok(ScoringScheme::default_for(mode).with_overrides(&merged)?)
    }

    /// Example configuration with the built-in scoring spelled out
    pub fn example() -> Self {
        let scheme_overrides = |scheme: ScoringScheme| ScoringOverrides {
            match_score: Some(scheme.match_score()),
            mismatch: Some(scheme.mismatch()),
            gap: Some(scheme.gap()),
        };
        Config {
            general: GeneralConfig::default(),
            global: scheme_overrides(ScoringScheme::global_default()),
            local: scheme_overrides(ScoringScheme::local_default()),
        }
    }

    /// Example configuration file content
    pub fn example_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&Self::example())?)
    }
}
