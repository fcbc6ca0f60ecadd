//! Per-row creator-type classification.

use kolmatch_core::{CreatorType, MentionRow};

use crate::index::ReferenceIndex;
use crate::normalize::{instagram_author, tiktok_username_from_mention};

/// Channel literal for Instagram mentions.
pub const CHANNEL_INSTAGRAM: &str = "Instagram";
/// Canonical channel literal for TikTok mentions. Compared case-sensitively;
/// near-miss spellings are a data-quality problem in the batch, not an alias.
pub const CHANNEL_TIKTOK: &str = "TikTok";
/// Channels whose rows are never classified or counted.
pub const MUTED_CHANNELS: [&str; 3] = ["Online Media", "Forum", "Blog"];
/// Link written for a matched Instagram author whose roster row has no link.
pub const PLACEHOLDER_LINK: &str = "-";

/// Outcome of classifying one mention row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDecision {
    pub creator_type: CreatorType,
    /// The roster link backing a KOL match; `None` otherwise.
    pub matched_link: Option<String>,
}

impl RowDecision {
    fn kol(matched_link: String) -> Self {
        RowDecision {
            creator_type: CreatorType::Kol,
            matched_link: Some(matched_link),
        }
    }

    fn organic() -> Self {
        RowDecision {
            creator_type: CreatorType::Organic,
            matched_link: None,
        }
    }

    fn unclassified() -> Self {
        RowDecision {
            creator_type: CreatorType::Unclassified,
            matched_link: None,
        }
    }
}

/// Classifies one mention row against the reference index.
///
/// Pure function of its inputs. Branch precedence:
/// 1. Instagram — blank author is unclassified; a known author is KOL with
///    the roster row's verbatim link (or [`PLACEHOLDER_LINK`] when the row
///    has none); everyone else is Organic.
/// 2. TikTok — the mention link's canonical username decides KOL vs Organic.
/// 3. Muted channels (Online Media, Forum, Blog) — unclassified.
/// 4. Anything else — Organic.
///
/// Unparseable or missing fields never raise; they fall through to the
/// no-match side of whichever branch applies.
#[must_use]
pub fn classify(row: &MentionRow, index: &ReferenceIndex) -> RowDecision {
    match row.channel.as_str() {
        CHANNEL_INSTAGRAM => {
            let Some(author) = instagram_author(&row.author) else {
                return RowDecision::unclassified();
            };
            if index.contains_instagram_author(author) {
                let link = index
                    .instagram_roster_link(author)
                    .unwrap_or(PLACEHOLDER_LINK);
                RowDecision::kol(link.to_owned())
            } else {
                RowDecision::organic()
            }
        }
        CHANNEL_TIKTOK => {
            let matched = tiktok_username_from_mention(row.link_url.trim())
                .and_then(|username| index.lookup_tiktok(&username));
            match matched {
                Some(link) => RowDecision::kol(link.to_owned()),
                None => RowDecision::organic(),
            }
        }
        channel if MUTED_CHANNELS.contains(&channel) => RowDecision::unclassified(),
        channel => {
            if channel.eq_ignore_ascii_case(CHANNEL_TIKTOK) {
                tracing::warn!(
                    channel,
                    "channel differs from the canonical \"TikTok\" literal only by case; \
                     treating as unrecognized"
                );
            }
            RowDecision::organic()
        }
    }
}
