//! Application constants for KMA feed processing
//!
//! This module contains the feed format markers, resource paths,
//! and default values used throughout the KMA processor application.

// =============================================================================
// Feed Format Markers
// =============================================================================

/// Marker sequence that anchors the header row in typ01 tabular feeds
///
/// The upstream embeds a variable amount of preamble and comment text before
/// the actual header; this marker is the only stable anchor.
pub const HEADER_MARKER: &str = "# REG_ID";

/// Sentinel line that terminates the data block in forecast feeds
///
/// The region feed carries no terminator marker.
pub const FORECAST_END_SENTINEL: &str = "#7777END";

/// Minimum whitespace-delimited token count for a forecast header row
///
/// Both tabular feeds begin their header with the same marker text; the
/// token-count guard disambiguates the forecast feed's wider header from
/// the region feed's narrower one. A qualifying header must split into
/// strictly more tokens than this.
pub const FORECAST_MIN_HEADER_TOKENS: usize = 5;

/// Minimum whitespace-delimited token count for a region header row
pub const REGION_MIN_HEADER_TOKENS: usize = 3;

/// Field names observed in upstream short-term land forecast headers
pub const FORECAST_FIELD_NAMES: &[&str] =
    &["REG_ID", "TM_FC", "TM_EF", "TA", "ST", "SKY", "PREP", "WF"];

/// Timestamp layout of the TM_FC / TM_EF forecast fields (KST, minute precision)
pub const FORECAST_TIME_FORMAT: &str = "%Y%m%d%H%M";

// =============================================================================
// Upstream Resource Paths
// =============================================================================

/// Resource path of the short-term land forecast feed
pub const FORECAST_PATH: &str = "fct_afs_dl.php";

/// Resource path of the forecast region table feed
pub const REGION_PATH: &str = "fct_shrt_reg.php";

// =============================================================================
// Region Categories
// =============================================================================

/// Region type codes carried in the REG_SP column of the region feed
pub mod region_category {
    /// Broad forecast region
    pub const BROAD: &str = "A";

    /// Local forecast region
    pub const LOCAL: &str = "B";

    /// City-level forecast region
    pub const CITY: &str = "C";

    /// All known region category codes
    pub const ALL_KNOWN: &[&str] = &[BROAD, LOCAL, CITY];
}

// =============================================================================
// Transport Defaults
// =============================================================================

/// Default base URL of the KMA APIHUB typ01 endpoint
pub const DEFAULT_BASE_URL: &str = "https://apihub.kma.go.kr/api/typ01/url";

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted for the APIHUB auth key
pub const AUTH_KEY_ENV: &str = "KMA_AUTH_KEY";

/// Query parameter name carrying the auth key
pub const AUTH_KEY_PARAM: &str = "authKey";
