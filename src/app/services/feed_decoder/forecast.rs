//! Forecast table decoding
//!
//! Forecast feeds carry comma-separated data rows beneath the header,
//! terminated by a `#7777END` sentinel line. Values may contain internal
//! spaces (forecast phrases like "흐리고 비"), so rows split on commas,
//! never on whitespace.

use crate::app::models::ForecastRecord;
use crate::constants::{FORECAST_END_SENTINEL, FORECAST_MIN_HEADER_TOKENS};
use tracing::debug;

use super::header::{header_fields, locate_header};

/// Decode a forecast feed into field-name/value records
///
/// Data rows run from the line after the header to the end of input,
/// skipping blank lines, `#`-prefixed comment lines, and the `#7777END`
/// sentinel. Each kept row splits on commas into positional values,
/// individually trimmed and zipped against the header's field names.
/// Rows with fewer values than field names leave the trailing fields
/// absent; values beyond the field count are dropped. Output preserves
/// input row order, which carries the upstream's forecast timestamp
/// ordering.
///
/// Returns an empty vector when no qualifying header line exists.
pub fn decode_forecast(text: &str) -> Vec<ForecastRecord> {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(header_idx) = locate_header(&lines, FORECAST_MIN_HEADER_TOKENS) else {
        debug!("no forecast header row found in {} lines", lines.len());
        return Vec::new();
    };

    let fields = header_fields(lines[header_idx]);
    debug!(
        "forecast header at line {} with {} fields",
        header_idx,
        fields.len()
    );

    let mut records = Vec::new();
    for line in &lines[header_idx + 1..] {
        if line.trim().is_empty() || line.starts_with('#') || line.trim() == FORECAST_END_SENTINEL {
            continue;
        }

        let mut record = ForecastRecord::new();
        for (field, value) in fields.iter().zip(line.split(',')) {
            record.insert(field.clone(), value.trim());
        }
        records.push(record);
    }

    debug!("decoded {} forecast records", records.len());
    records
}
