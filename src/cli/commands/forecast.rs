//! Forecast command implementation for KMA processor CLI

use std::time::Instant;
use tracing::{info, warn};

use super::shared::{load_config, render_forecast_table, setup_logging, write_output};
use crate::app::services::transport::KmaTransport;
use crate::cli::args::{ForecastArgs, OutputFormat};
use crate::Result;

/// Forecast command runner
///
/// Fetches and decodes the short-term land forecast for the requested
/// region, then renders it in the selected output format.
pub async fn run_forecast(args: ForecastArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = load_config(
        args.base_url.clone(),
        args.auth_key.clone(),
        args.timeout_secs,
    )?;
    let transport = KmaTransport::new(config)?;

    info!("Fetching short-term land forecast for region {}", args.reg_id);
    let start = Instant::now();

    let records = transport.forecast(&args.reg_id).await?;

    info!(
        "Decoded {} forecast records in {:.2}s",
        records.len(),
        start.elapsed().as_secs_f64()
    );
    if records.is_empty() {
        warn!(
            "No forecast records decoded for region {} - the upstream response carried no tabular data",
            args.reg_id
        );
    }

    let output = match args.output_format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Human => {
            if args.output_file.is_some() {
                colored::control::set_override(false);
            }
            render_forecast_table(&records)
        }
    };

    write_output(&output, args.output_file.as_deref())
}
