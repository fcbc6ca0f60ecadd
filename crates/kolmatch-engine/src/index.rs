//! Reference index built once per run from the roster record set.

use std::collections::HashMap;

use kolmatch_core::ReferenceRecord;

use crate::normalize::{instagram_author, tiktok_username_from_roster};

/// Lookup structure over one roster snapshot. Read-only after [`ReferenceIndex::build`].
///
/// Holds two maps: trailing-trimmed Instagram author name → that roster row's
/// verbatim TikTok link (if any), and canonical TikTok username → the
/// originating link string. Duplicate keys resolve first-seen-wins, so the
/// index is deterministic in roster order.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    instagram: HashMap<String, Option<String>>,
    tiktok: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Builds the index from a roster snapshot.
    ///
    /// Records without an Instagram author name are skipped on the Instagram
    /// side; links that fail to normalize are skipped on the TikTok side, so
    /// every TikTok key is a non-empty canonical username.
    #[must_use]
    pub fn build(records: &[ReferenceRecord]) -> Self {
        let mut instagram: HashMap<String, Option<String>> = HashMap::new();
        let mut tiktok: HashMap<String, String> = HashMap::new();

        for record in records {
            if let Some(name) = record
                .instagram_author
                .as_deref()
                .and_then(instagram_author)
            {
                // The associated link is the roster cell used verbatim — it
                // may be shaped differently from anything the TikTok map holds.
                instagram
                    .entry(name.to_owned())
                    .or_insert_with(|| record.tiktok_link.clone());
            }

            if let Some(link) = record.tiktok_link.as_deref() {
                if let Some(username) = tiktok_username_from_roster(link) {
                    tiktok.entry(username).or_insert_with(|| link.to_owned());
                }
            }
        }

        tracing::debug!(
            instagram_authors = instagram.len(),
            tiktok_usernames = tiktok.len(),
            roster_records = records.len(),
            "built reference index"
        );

        ReferenceIndex { instagram, tiktok }
    }

    /// Whether the trimmed author name appears in the roster's Instagram set.
    #[must_use]
    pub fn contains_instagram_author(&self, author: &str) -> bool {
        self.instagram.contains_key(author)
    }

    /// The verbatim roster link for a known Instagram author, if the roster
    /// row carried one.
    #[must_use]
    pub fn instagram_roster_link(&self, author: &str) -> Option<&str> {
        self.instagram.get(author).and_then(|link| link.as_deref())
    }

    /// The originating roster link for a canonical TikTok username.
    #[must_use]
    pub fn lookup_tiktok(&self, username: &str) -> Option<&str> {
        self.tiktok.get(username).map(String::as_str)
    }
}
