//! Regions command implementation for KMA processor CLI

use std::time::Instant;
use tracing::info;

use super::shared::{load_config, render_region_table, setup_logging, write_output};
use crate::app::services::transport::KmaTransport;
use crate::cli::args::{OutputFormat, RegionsArgs};
use crate::Result;

/// Regions command runner
///
/// Fetches and decodes the forecast region table, optionally filtered by
/// category code, then renders it in the selected output format.
pub async fn run_regions(args: RegionsArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let config = load_config(
        args.base_url.clone(),
        args.auth_key.clone(),
        args.timeout_secs,
    )?;
    let transport = KmaTransport::new(config)?;

    info!("Fetching forecast region table");
    let start = Instant::now();

    let mut records = transport.regions().await?;
    let total = records.len();

    if let Some(category) = &args.category {
        records.retain(|record| record.reg_sp.as_deref() == Some(category.as_str()));
        info!(
            "Filtered {} of {} regions with category {}",
            records.len(),
            total,
            category
        );
    }

    info!(
        "Decoded {} region records in {:.2}s",
        records.len(),
        start.elapsed().as_secs_f64()
    );

    let output = match args.output_format {
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Human => {
            if args.output_file.is_some() {
                colored::control::set_override(false);
            }
            render_region_table(&records)
        }
    };

    write_output(&output, args.output_file.as_deref())
}
