/// Application configuration shared by the roster provider and the CLI.
///
/// Loaded from environment variables by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Identifier of the roster document on the export host.
    pub roster_document_id: String,
    /// Sheet name within the roster document.
    pub roster_sheet: String,
    /// Seconds before an in-flight roster request times out.
    pub fetch_timeout_secs: u64,
    /// User agent sent on roster requests.
    pub fetch_user_agent: String,
    /// Additional attempts after a transient roster fetch failure.
    pub fetch_max_retries: u32,
    /// Base delay for the fetch retry back-off schedule.
    pub fetch_retry_backoff_base_ms: u64,
    /// Seconds a cached roster snapshot stays fresh. `None` keeps the
    /// snapshot until explicitly invalidated.
    pub roster_cache_ttl_secs: Option<u64>,
}
