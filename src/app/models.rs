//! Data models for KMA feed processing
//!
//! This module contains the core data structures for representing decoded
//! typ01 feed rows: forecast records with a run-time field set, fixed-shape
//! region records, and the resource/payload types used by the transport
//! dispatch.

use crate::constants::{self, region_category};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Forecast Records
// =============================================================================

/// One decoded forecast row, as a mapping from field name to string value
///
/// The field set is determined at run time from the feed's header line, not
/// known statically, so the record is a map rather than a fixed structure.
/// Callers that need fixed fields perform named lookups with explicit
/// handling of absent keys. Values are kept as strings; no numeric coercion
/// is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ForecastRecord {
    values: BTreeMap<String, String>,
}

impl ForecastRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Look up a field value by name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Whether the record carries the given field
    pub fn contains_field(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no populated fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over populated field name/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Forecast announce time, parsed from the TM_FC field
    pub fn announce_time(&self) -> Option<NaiveDateTime> {
        self.parse_time("TM_FC")
    }

    /// Forecast effective time, parsed from the TM_EF field
    pub fn effective_time(&self) -> Option<NaiveDateTime> {
        self.parse_time("TM_EF")
    }

    fn parse_time(&self, field: &str) -> Option<NaiveDateTime> {
        self.get(field)
            .and_then(|value| NaiveDateTime::parse_from_str(value, constants::FORECAST_TIME_FORMAT).ok())
    }
}

impl FromIterator<(String, String)> for ForecastRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Region Records
// =============================================================================

/// One decoded forecast region row
///
/// Region rows are fixed-shape: the region identifier, the region category
/// code, and the human-readable region name. Rows with fewer than four
/// tokens leave the category and name absent rather than failing the
/// decode; the feed is an external uncontrolled source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    /// Region identifier (e.g., "11B10101")
    pub reg_id: String,

    /// Region category code (A: broad, B: local, C: city)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_sp: Option<String>,

    /// Region name, possibly multi-word (e.g., "서울 특별시")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_name: Option<String>,
}

impl RegionRecord {
    /// Human-readable label for the region category code, if known
    pub fn category_label(&self) -> Option<&'static str> {
        match self.reg_sp.as_deref() {
            Some(region_category::BROAD) => Some("broad"),
            Some(region_category::LOCAL) => Some("local"),
            Some(region_category::CITY) => Some("city"),
            _ => None,
        }
    }
}

// =============================================================================
// Resource Dispatch
// =============================================================================

/// Logical upstream resource, keyed by its request path
///
/// The two tabular feeds get decoded; any other resource path passes the
/// recoded text through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedResource {
    /// Short-term land forecast table (`fct_afs_dl.php`)
    Forecast,

    /// Forecast region table (`fct_shrt_reg.php`)
    RegionTable,

    /// Any other resource; raw passthrough
    Other,
}

impl FeedResource {
    /// Classify an upstream resource path
    pub fn from_path(path: &str) -> Self {
        match path {
            constants::FORECAST_PATH => Self::Forecast,
            constants::REGION_PATH => Self::RegionTable,
            _ => Self::Other,
        }
    }
}

/// Decoded payload returned by the transport dispatch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedPayload {
    /// Decoded forecast records
    Forecast(Vec<ForecastRecord>),

    /// Decoded region records
    Regions(Vec<RegionRecord>),

    /// Raw recoded feed text for undecoded resources
    Raw(String),
}

impl FeedPayload {
    /// Number of decoded records, or `None` for raw passthrough payloads
    pub fn record_count(&self) -> Option<usize> {
        match self {
            Self::Forecast(records) => Some(records.len()),
            Self::Regions(records) => Some(records.len()),
            Self::Raw(_) => None,
        }
    }
}
