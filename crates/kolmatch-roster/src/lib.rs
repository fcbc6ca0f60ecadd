//! Reference roster provider.
//!
//! Fetches the curated influencer roster from its remote export endpoint,
//! decodes the CSV body into [`kolmatch_core::ReferenceRecord`]s, retries
//! transient failures, and caches the snapshot under an explicit refresh
//! policy owned by the caller.

pub mod cache;
pub mod client;
pub mod error;
pub mod parse;
mod retry;

pub use cache::{RefreshPolicy, RosterCache};
pub use client::RosterClient;
pub use error::RosterError;
pub use parse::parse_roster;
