//! KMA APIHUB transport adapter
//!
//! Fetches typ01 resources over HTTP, recodes the EUC-KR response bytes,
//! and dispatches the recoded text to the matching decoder. Configuration
//! is injected at construction time; the adapter holds no global state.

use reqwest::Client;
use tracing::{debug, info, warn};

use super::encoding::{decode_euc_kr, decode_euc_kr_lossy};
use crate::app::models::{FeedPayload, FeedResource, ForecastRecord, RegionRecord};
use crate::app::services::feed_decoder::{decode_forecast, decode_regions};
use crate::config::KmaConfig;
use crate::constants::{AUTH_KEY_PARAM, FORECAST_PATH, REGION_PATH};
use crate::{Error, Result};

/// Transport adapter for the KMA APIHUB typ01 endpoint
///
/// Every call re-fetches and re-parses from scratch; there is no caching
/// layer and no retry policy. Concurrent calls are fully independent.
#[derive(Debug, Clone)]
pub struct KmaTransport {
    client: Client,
    config: KmaConfig,
}

impl KmaTransport {
    /// Create a transport with the given configuration
    ///
    /// Validates the configuration and builds the HTTP client with the
    /// configured request timeout.
    pub fn new(config: KmaConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// The transport's configuration
    pub fn config(&self) -> &KmaConfig {
        &self.config
    }

    /// Fetch a resource and return its recoded text
    ///
    /// Issues a GET for `{base_url}/{path}` with the caller's query
    /// parameters plus the configured auth key, reads the response as raw
    /// bytes, and recodes EUC-KR into UTF-8. A non-2xx status yields an
    /// [`Error::UpstreamStatus`] carrying the status code and a
    /// best-effort decoded error body.
    pub async fn fetch_raw(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("fetching {} with {} parameters", url, params.len());

        let mut request = self.client.get(&url).query(params);
        if !self.config.auth_key.is_empty() {
            request = request.query(&[(AUTH_KEY_PARAM, self.config.auth_key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(format!("Request to {} failed", url), e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read response body from {}", url), e))?;

        if !status.is_success() {
            let body = decode_euc_kr_lossy(&bytes);
            warn!("upstream returned status {} for {}", status.as_u16(), path);
            return Err(Error::upstream_status(
                status.as_u16(),
                body.trim().to_string(),
            ));
        }

        decode_euc_kr(&bytes)
    }

    /// Fetch a resource and decode it according to its path
    ///
    /// The short-term land forecast and region table resources decode into
    /// records; any other path passes the recoded text through unmodified.
    pub async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<FeedPayload> {
        let text = self.fetch_raw(path, params).await?;

        let payload = match FeedResource::from_path(path) {
            FeedResource::Forecast => FeedPayload::Forecast(decode_forecast(&text)),
            FeedResource::RegionTable => FeedPayload::Regions(decode_regions(&text)),
            FeedResource::Other => FeedPayload::Raw(text),
        };

        match payload.record_count() {
            Some(count) => info!("decoded {} records from {}", count, path),
            None => info!("passing through raw text from {}", path),
        }

        Ok(payload)
    }

    /// Fetch and decode the short-term land forecast for a region
    pub async fn forecast(&self, reg_id: &str) -> Result<Vec<ForecastRecord>> {
        let text = self
            .fetch_raw(FORECAST_PATH, &[("reg", reg_id), ("disp", "1"), ("help", "1")])
            .await?;

        Ok(decode_forecast(&text))
    }

    /// Fetch and decode the forecast region table
    pub async fn regions(&self) -> Result<Vec<RegionRecord>> {
        let text = self.fetch_raw(REGION_PATH, &[("tmfc", "0")]).await?;

        Ok(decode_regions(&text))
    }
}
