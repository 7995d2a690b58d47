use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "license-matchr",
    about = "Classify license texts, names and URLs into SPDX identifiers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.license-matchr/config.toml, fallback ~/.config/license-matchr/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Show all records and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the summary line and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a plain-text license file against the corpus
    Text {
        /// File to read; `-` reads stdin
        file: PathBuf,
    },
    /// Extract the license text of an HTML page and score it
    Html {
        /// File to read; `-` reads stdin
        file: PathBuf,
    },
    /// Classify a license name such as "GPLv3" or "Apache 2"
    Name {
        name: String,
    },
    /// Classify a license URL, fetching it when the registry has no match
    Url {
        url: String,
    },
    /// Classify every record of a JSON file
    Batch {
        /// JSON array of license records
        file: PathBuf,

        /// Write applied matches back into the file
        #[arg(long)]
        update: bool,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Minimum similarity confidence for applying a match
    #[arg(long, global = true, value_name = "0..1")]
    pub min_confidence: Option<f64>,

    /// Number of corpus documents to rank
    #[arg(long, global = true)]
    pub top_n: Option<usize>,

    /// Report every matching rule instead of stopping at the first
    #[arg(long, global = true)]
    pub all_rules: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(min) = self.min_confidence {
            config.detection.min_confidence = min;
        }
        if let Some(n) = self.top_n {
            config.detection.top_n = n;
        }
        if self.all_rules {
            config.detection.early_exit = false;
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
