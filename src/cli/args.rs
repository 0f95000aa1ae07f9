//! Command-line argument definitions for KMA processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::constants::region_category;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the KMA weather feed processor
///
/// Fetches Korea Meteorological Administration APIHUB typ01 fixed-width
/// text feeds and decodes them into structured JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kma-processor",
    version,
    about = "Decode KMA APIHUB typ01 fixed-width weather feeds into structured JSON",
    long_about = "A tool that fetches Korea Meteorological Administration APIHUB typ01 \
                  text feeds (EUC-KR encoded, fixed-width tables) and decodes them into \
                  structured records: short-term land forecasts keyed by header field \
                  names, and the forecast region table as fixed-shape region records."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Available subcommands for the KMA processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch and decode the short-term land forecast for a region
    Forecast(ForecastArgs),
    /// Fetch and decode the forecast region table
    Regions(RegionsArgs),
    /// Fetch any other typ01 resource as raw recoded text
    Fetch(FetchArgs),
}

/// Arguments for the forecast command
#[derive(Debug, Clone, Parser)]
pub struct ForecastArgs {
    /// Forecast region identifier
    ///
    /// A region code from the region table, e.g. 11B10101 for Seoul.
    /// Use the regions command to list available codes.
    #[arg(
        short = 'r',
        long = "reg-id",
        value_name = "ID",
        help = "Forecast region identifier (e.g. 11B10101)"
    )]
    pub reg_id: String,

    /// Base endpoint URL for the APIHUB typ01 service
    ///
    /// If not specified, uses the production APIHUB endpoint.
    #[arg(long = "base-url", value_name = "URL", help = "APIHUB base URL")]
    pub base_url: Option<String>,

    /// APIHUB auth key
    ///
    /// If not specified, reads the KMA_AUTH_KEY environment variable.
    #[arg(long = "auth-key", value_name = "KEY", help = "APIHUB auth key")]
    pub auth_key: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Upstream request timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Output format for decoded records
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for decoded records"
    )]
    pub output_format: OutputFormat,

    /// Output file for decoded records
    ///
    /// If not specified, outputs to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for decoded records"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ForecastArgs {
    /// Validate the forecast command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.reg_id.trim().is_empty() {
            return Err(Error::configuration(
                "Region identifier cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

/// Arguments for the regions command
#[derive(Debug, Clone, Parser)]
pub struct RegionsArgs {
    /// Filter regions by category code
    ///
    /// A: broad forecast regions, B: local forecast regions, C: city-level
    /// regions. If not specified, lists all regions.
    #[arg(
        short = 'c',
        long = "category",
        value_name = "CODE",
        help = "Filter regions by category code (A: broad, B: local, C: city)"
    )]
    pub category: Option<String>,

    /// Base endpoint URL for the APIHUB typ01 service
    #[arg(long = "base-url", value_name = "URL", help = "APIHUB base URL")]
    pub base_url: Option<String>,

    /// APIHUB auth key
    ///
    /// If not specified, reads the KMA_AUTH_KEY environment variable.
    #[arg(long = "auth-key", value_name = "KEY", help = "APIHUB auth key")]
    pub auth_key: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Upstream request timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Output format for decoded records
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for decoded records"
    )]
    pub output_format: OutputFormat,

    /// Output file for decoded records
    ///
    /// If not specified, outputs to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for decoded records"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl RegionsArgs {
    /// Validate the regions command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(category) = &self.category {
            if !region_category::ALL_KNOWN.contains(&category.as_str()) {
                return Err(Error::configuration(format!(
                    "Unknown region category '{}'. Known categories: {}",
                    category,
                    region_category::ALL_KNOWN.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

/// Arguments for the fetch command (raw passthrough)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Upstream resource path
    ///
    /// Any typ01 resource, e.g. fct_afs_dl.php. The two tabular feed paths
    /// decode into records; anything else passes through as raw text.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "RESOURCE",
        help = "Upstream resource path (e.g. fct_afs_dl.php)"
    )]
    pub path: String,

    /// Additional query parameters as key=value pairs
    ///
    /// May be repeated, e.g. --param reg=11B10101 --param disp=1.
    #[arg(
        long = "param",
        value_name = "KEY=VALUE",
        help = "Additional query parameter (repeatable)"
    )]
    pub params: Vec<QueryParam>,

    /// Base endpoint URL for the APIHUB typ01 service
    #[arg(long = "base-url", value_name = "URL", help = "APIHUB base URL")]
    pub base_url: Option<String>,

    /// APIHUB auth key
    ///
    /// If not specified, reads the KMA_AUTH_KEY environment variable.
    #[arg(long = "auth-key", value_name = "KEY", help = "APIHUB auth key")]
    pub auth_key: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "Upstream request timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Output format for the fetched payload
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the fetched payload"
    )]
    pub output_format: OutputFormat,

    /// Output file for the fetched payload
    ///
    /// If not specified, outputs to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the fetched payload"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(Error::configuration(
                "Resource path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

/// Output format options for decoded results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// A single key=value query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

impl FromStr for QueryParam {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            Error::configuration(format!(
                "Invalid query parameter '{}': expected key=value",
                s
            ))
        })?;

        if key.trim().is_empty() {
            return Err(Error::configuration(format!(
                "Invalid query parameter '{}': key cannot be empty",
                s
            )));
        }

        Ok(QueryParam {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Map a -v count to a log level name
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
