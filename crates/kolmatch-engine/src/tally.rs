//! Mention aggregation for KOL matches.

use std::collections::HashMap;

/// One row of a per-platform mention summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSummaryRow {
    pub author: String,
    pub link_url: String,
    pub mentions: u64,
}

/// Running tally of `(author, matched link)` pairs for one platform.
///
/// Grouping is by exact pair equality, and output order is the order each
/// distinct pair was first recorded — stable grouping, not sorted. The same
/// author with two different matched links yields two entries.
#[derive(Debug, Default)]
pub struct MentionTally {
    order: Vec<(String, String)>,
    counts: HashMap<(String, String), u64>,
}

impl MentionTally {
    #[must_use]
    pub fn new() -> Self {
        MentionTally::default()
    }

    /// Records one KOL mention.
    pub fn record(&mut self, author: &str, matched_link: &str) {
        let key = (author.to_owned(), matched_link.to_owned());
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, 1);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Finalizes the tally into summary rows in first-seen order.
    #[must_use]
    pub fn into_summary(self) -> Vec<MentionSummaryRow> {
        let counts = self.counts;
        self.order
            .into_iter()
            .map(|key| {
                let mentions = counts.get(&key).copied().unwrap_or(0);
                MentionSummaryRow {
                    author: key.0,
                    link_url: key.1,
                    mentions,
                }
            })
            .collect()
    }
}
