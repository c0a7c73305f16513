//! CLI for ULR decoding and certificate verification.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use ulrv_core::config::{self, OutputFormat};

use commands::{run_completions, run_decode, run_format, run_scan, run_verify, VerifyArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ulrv")]
#[command(about = "Decode ULRs and verify lab certificates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode one or more ULRs into their fields.
    Decode {
        /// ULR strings (case-insensitive, surrounding whitespace ignored).
        #[arg(required = true)]
        ulrs: Vec<String>,
        /// Print JSON records instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print a ULR with its fields separated by spaces.
    Format {
        /// ULR string.
        ulr: String,
    },

    /// Extract certificate number, ULR, issue date and lab type from report text.
    Scan {
        /// Path to a text file (e.g. OCR output).
        path: PathBuf,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check a report's claims against the lab registry.
    Verify(VerifyArgs),

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Whether the inputs passed every check. `Rejected` maps to exit status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl Outcome {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let json_default = cfg.output == OutputFormat::Json;

        match cli.command {
            CliCommand::Decode { ulrs, json } => run_decode(&ulrs, json || json_default),
            CliCommand::Format { ulr } => run_format(&ulr),
            CliCommand::Scan { path, json } => run_scan(&path, json || json_default),
            CliCommand::Verify(mut args) => {
                args.json |= json_default;
                run_verify(&args, &cfg)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(Outcome::Accepted)
            }
        }
    }
}

#[cfg(test)]
mod tests;
