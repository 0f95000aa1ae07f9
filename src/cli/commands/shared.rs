//! Shared utilities for KMA processor CLI commands
//!
//! This module provides logging setup, configuration layering, output
//! writing, and the human-readable table renderers used across commands.

use colored::*;
use std::path::Path;
use tracing::debug;

use crate::app::models::{ForecastRecord, RegionRecord};
use crate::config::KmaConfig;
use crate::{Error, Result};

/// Set up structured logging for a CLI command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kma_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the transport configuration using a layered approach (defaults ->
/// environment -> args)
pub fn load_config(
    base_url: Option<String>,
    auth_key: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<KmaConfig> {
    let mut config = KmaConfig::default();

    if let Some(env_key) = KmaConfig::auth_key_from_env() {
        config.auth_key = env_key;
    }

    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(auth_key) = auth_key {
        config.auth_key = auth_key;
    }
    if let Some(timeout_secs) = timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    config.validate()?;
    debug!(
        "Configuration loaded: base_url={}, timeout={}s",
        config.base_url, config.timeout_secs
    );

    Ok(config)
}

/// Write command output to the given file, or to stdout when none is given
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write output to {}", path.display()), e)
            })?;
            debug!("Output written to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// Render forecast records as a human-readable table
pub fn render_forecast_table(records: &[ForecastRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        "Short-term Land Forecast".bright_green().bold()
    ));

    if let Some(announce) = records.first().and_then(|r| r.announce_time()) {
        out.push_str(&format!(
            "  {} {}\n",
            "Announced:".bright_cyan(),
            announce.format("%Y-%m-%d %H:%M")
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "  {:<18} {:<10} {:>4} {:>4} {:<6} {:>5}  {}\n",
        "EFFECTIVE", "REG_ID", "TA", "ST", "SKY", "PREP", "WF"
    ));

    for record in records {
        let effective = record
            .effective_time()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| record.get("TM_EF").unwrap_or("-").to_string());

        out.push_str(&format!(
            "  {:<18} {:<10} {:>4} {:>4} {:<6} {:>5}  {}\n",
            effective,
            record.get("REG_ID").unwrap_or("-"),
            record.get("TA").unwrap_or("-"),
            record.get("ST").unwrap_or("-"),
            record.get("SKY").unwrap_or("-"),
            record.get("PREP").unwrap_or("-"),
            record.get("WF").unwrap_or("-"),
        ));
    }

    out.push_str(&format!(
        "\n  {} {}\n",
        "Records:".bright_cyan(),
        records.len().to_string().bright_white().bold()
    ));

    out
}

/// Render region records as a human-readable table
pub fn render_region_table(records: &[RegionRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Forecast Regions".bright_green().bold()));
    out.push_str(&format!(
        "  {:<12} {:<10} {}\n",
        "REG_ID", "CATEGORY", "NAME"
    ));

    for record in records {
        let category = match (record.reg_sp.as_deref(), record.category_label()) {
            (Some(code), Some(label)) => format!("{} ({})", code, label),
            (Some(code), None) => code.to_string(),
            (None, _) => "-".to_string(),
        };

        out.push_str(&format!(
            "  {:<12} {:<10} {}\n",
            record.reg_id,
            category,
            record.reg_name.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&format!(
        "\n  {} {}\n",
        "Regions:".bright_cyan(),
        records.len().to_string().bright_white().bold()
    ));

    out
}
