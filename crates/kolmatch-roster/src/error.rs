use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid roster URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("roster CSV decode error: {source}")]
    Decode {
        #[source]
        source: csv::Error,
    },

    #[error(
        "roster sheet has neither an \"Author Name Instagram\" nor a \"Link Tiktok\" column \
         (found: {headers})"
    )]
    MissingColumns { headers: String },
}
