//! HTTP client for the roster export endpoint.
//!
//! Wraps `reqwest` with roster-specific error handling and CSV decoding. The
//! roster lives in a hosted spreadsheet; its CSV export is addressed as
//! `<base>/<document id>/export?format=csv&sheet=<name>`.

use std::time::Duration;

use reqwest::{Client, Url};

use kolmatch_core::{AppConfig, ReferenceRecord};

use crate::error::RosterError;
use crate::parse::parse_roster;
use crate::retry::retry_with_backoff;

const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/";

/// Client for fetching the reference roster.
///
/// Manages the HTTP client, export URL, and retry policy. Use
/// [`RosterClient::new`] for production or [`RosterClient::with_base_url`] to
/// point at a mock server in tests.
pub struct RosterClient {
    client: Client,
    export_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl RosterClient {
    /// Creates a new client pointed at the production export host.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RosterError::InvalidUrl`] if the document
    /// id does not form a valid URL.
    pub fn new(cfg: &AppConfig) -> Result<Self, RosterError> {
        Self::with_base_url(cfg, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RosterError::InvalidUrl`] if `base_url`
    /// plus the document id does not form a valid URL.
    pub fn with_base_url(cfg: &AppConfig, base_url: &str) -> Result<Self, RosterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.fetch_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&cfg.fetch_user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join appends the document path rather than replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| RosterError::InvalidUrl {
            url: base_url.to_owned(),
            reason,
        };
        let mut export_url = Url::parse(&normalised)
            .and_then(|base| base.join(&format!("{}/export", cfg.roster_document_id)))
            .map_err(|e| invalid(e.to_string()))?;
        export_url
            .query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("sheet", &cfg.roster_sheet);

        Ok(Self {
            client,
            export_url,
            max_retries: cfg.fetch_max_retries,
            backoff_base_ms: cfg.fetch_retry_backoff_base_ms,
        })
    }

    /// Fetches and decodes the roster once, with no retry.
    ///
    /// # Errors
    ///
    /// - [`RosterError::Http`] on network failure or non-2xx HTTP status.
    /// - [`RosterError::Decode`] / [`RosterError::MissingColumns`] if the
    ///   body is not a readable roster sheet.
    pub async fn fetch_roster(&self) -> Result<Vec<ReferenceRecord>, RosterError> {
        let response = self.client.get(self.export_url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let records = parse_roster(&body)?;
        tracing::debug!(records = records.len(), "fetched roster snapshot");
        Ok(records)
    }

    /// Fetches the roster, retrying transient failures per the configured
    /// back-off policy.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`RosterClient::fetch_roster`]; the last error is
    /// returned once the retry budget is exhausted.
    pub async fn fetch_roster_with_retry(&self) -> Result<Vec<ReferenceRecord>, RosterError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.fetch_roster()
        })
        .await
    }

    /// The export URL requests are sent to.
    #[must_use]
    pub fn export_url(&self) -> &Url {
        &self.export_url
    }
}
