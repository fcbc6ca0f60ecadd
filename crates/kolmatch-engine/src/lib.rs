//! Identity-matching engine: canonical-username normalization, reference
//! index construction, per-row creator-type classification, and mention
//! aggregation. Everything here is pure and synchronous; fetching the roster
//! and reading/writing batches belong to the calling crates.

pub mod classify;
pub mod index;
pub mod normalize;
pub mod run;
pub mod tally;

pub use classify::{classify, RowDecision};
pub use index::ReferenceIndex;
pub use run::{classify_batch, BatchReport};
pub use tally::{MentionSummaryRow, MentionTally};
