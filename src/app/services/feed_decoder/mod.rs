//! Decoder for KMA typ01 fixed-width weather feeds
//!
//! This module turns raw feed text (already recoded from EUC-KR into UTF-8
//! by the transport) into structured records. Two sub-decoders share a
//! common "find header row, then parse data rows" strategy:
//! - [`forecast`] - comma-separated rows following a recognized header line
//! - [`region`] - whitespace-separated fixed-column rows following a
//!   recognized header line
//! - [`header`] - the shared header-row locator
//!
//! Decoding is stateless and total: it never fails for malformed input, it
//! degrades to empty or partially-populated records. The feed is an
//! external legacy source whose format drift should thin the output, not
//! fail the whole response.
//!
//! ## Usage
//!
//! ```rust
//! use kma_processor::app::services::feed_decoder::decode_forecast;
//!
//! let feed = "# REG_ID TM_FC TM_EF TA ST SKY PREP WF\n\
//!             108,202601010500,202601010600,5,20,DB01,0,맑음\n\
//!             #7777END";
//! let records = decode_forecast(feed);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].get("WF"), Some("맑음"));
//! ```

pub mod forecast;
pub mod header;
pub mod region;

#[cfg(test)]
pub mod tests;

// Re-export the decoder entry points
pub use forecast::decode_forecast;
pub use header::{header_fields, locate_header};
pub use region::decode_regions;
