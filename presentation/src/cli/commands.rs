//! CLI command definitions

use clap::{Parser, ValueEnum};
use hike_domain::FormVariant;
use std::path::PathBuf;

/// Output format for the prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted result card
    Text,
    /// JSON document
    Json,
}

impl From<OutputFormat> for hike_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => hike_domain::OutputFormat::Text,
            OutputFormat::Json => hike_domain::OutputFormat::Json,
        }
    }
}

/// Form layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Single-number tenure fields and named ratings
    Classic,
    /// Years/months tenure fields, coded ratings and employment type
    Extended,
}

impl From<Variant> for FormVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Classic => FormVariant::Classic,
            Variant::Extended => FormVariant::Extended,
        }
    }
}

/// CLI arguments for hike-predictor
#[derive(Parser, Debug)]
#[command(name = "hike-predictor")]
#[command(author, version, about = "Forecast your promotion odds and salary hike")]
#[command(long_about = r#"
Hike Predictor walks you through a short career form and asks a prediction
service how likely a promotion is and what hike range to expect.

The form has three stages:
1. Company Details: company and designation
2. Experience & Compensation: CTC and tenure
3. Performance: rating (and employment type)

Configuration files are loaded from (in priority order):
1. HIKE_API_URL / HIKE_API_TIMEOUT_SECONDS environment variables
2. --config <path>     Explicit config file
3. ./hike.toml         Project-level config
4. ~/.config/hike-predictor/config.toml   Global config

Example:
  hike-predictor --api-url http://localhost:8000/predict
  hike-predictor --variant classic
  hike-predictor --answers profile.json --output json
"#)]
pub struct Cli {
    /// Prediction service URL (overrides config and HIKE_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Form layout
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Fill the form from a JSON file of field names to values instead of prompting
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print plain progress lines instead of a spinner
    #[arg(long)]
    pub plain_progress: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Do not read or write the cached prediction id
    #[arg(long)]
    pub no_cache: bool,
}
