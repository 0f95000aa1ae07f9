//! Region table decoding
//!
//! The region feed lists forecast regions in whitespace-separated fixed
//! columns. Region names may span multiple tokens ("서울 특별시"), so the
//! name is everything from the fifth token onward, rejoined with single
//! spaces. The region feed has no terminator sentinel.

use crate::app::models::RegionRecord;
use crate::constants::REGION_MIN_HEADER_TOKENS;
use tracing::debug;

use super::header::locate_header;

/// Decode a region feed into fixed-shape region records
///
/// Data rows run from the line after the header to the end of input,
/// skipping blank lines and `#`-prefixed comment lines. Each kept row is
/// trimmed and split on runs of whitespace: the first token is the region
/// identifier, the fourth is the category code, and tokens from the fifth
/// onward form the region name. Rows with fewer than four tokens yield a
/// record with the category and name absent rather than an error.
///
/// Returns an empty vector when no qualifying header line exists.
pub fn decode_regions(text: &str) -> Vec<RegionRecord> {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(header_idx) = locate_header(&lines, REGION_MIN_HEADER_TOKENS) else {
        debug!("no region header row found in {} lines", lines.len());
        return Vec::new();
    };

    let mut records = Vec::new();
    for line in &lines[header_idx + 1..] {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(reg_id) = tokens.first() else {
            continue;
        };

        records.push(RegionRecord {
            reg_id: reg_id.to_string(),
            reg_sp: tokens.get(3).map(|token| token.to_string()),
            reg_name: if tokens.len() >= 4 {
                Some(tokens[4..].join(" "))
            } else {
                None
            },
        });
    }

    debug!("decoded {} region records", records.len());
    records
}
