//! Fetch command implementation for KMA processor CLI

use std::time::Instant;
use tracing::info;

use super::shared::{
    load_config, render_forecast_table, render_region_table, setup_logging, write_output,
};
use crate::app::models::FeedPayload;
use crate::app::services::transport::KmaTransport;
use crate::cli::args::{FetchArgs, OutputFormat};
use crate::Result;

/// Fetch command runner
///
/// Fetches any typ01 resource. The two tabular feed paths decode into
/// records; anything else passes through as raw recoded text.
pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = load_config(
        args.base_url.clone(),
        args.auth_key.clone(),
        args.timeout_secs,
    )?;
    let transport = KmaTransport::new(config)?;

    let params: Vec<(&str, &str)> = args
        .params
        .iter()
        .map(|param| (param.key.as_str(), param.value.as_str()))
        .collect();

    info!("Fetching resource {}", args.path);
    let start = Instant::now();

    let payload = transport.fetch(&args.path, &params).await?;

    info!(
        "Fetched {} in {:.2}s",
        args.path,
        start.elapsed().as_secs_f64()
    );

    let output = match args.output_format {
        OutputFormat::Json => serde_json::to_string_pretty(&payload)?,
        OutputFormat::Human => {
            if args.output_file.is_some() {
                colored::control::set_override(false);
            }
            match &payload {
                FeedPayload::Forecast(records) => render_forecast_table(records),
                FeedPayload::Regions(records) => render_region_table(records),
                FeedPayload::Raw(text) => text.clone(),
            }
        }
    };

    write_output(&output, args.output_file.as_deref())
}
