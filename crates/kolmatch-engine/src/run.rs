//! Whole-batch classification.

use kolmatch_core::{CreatorType, MentionRow};

use crate::classify::{classify, RowDecision, CHANNEL_INSTAGRAM, CHANNEL_TIKTOK};
use crate::index::ReferenceIndex;
use crate::tally::{MentionSummaryRow, MentionTally};

/// Full deterministic output of one classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// One decision per input row, in row order.
    pub decisions: Vec<RowDecision>,
    pub kol_count: usize,
    pub organic_count: usize,
    pub instagram_summary: Vec<MentionSummaryRow>,
    pub tiktok_summary: Vec<MentionSummaryRow>,
}

/// Classifies every row of a batch against one roster snapshot.
///
/// 1. Classify each row in order ([`classify`]).
/// 2. Tally KOL `(author, matched link)` pairs per platform as they occur.
/// 3. Finalize both summary tables in first-seen order.
///
/// Pure function of its inputs: the same batch against the same snapshot
/// yields an identical report. No row-level condition aborts the run.
#[must_use]
pub fn classify_batch(rows: &[MentionRow], index: &ReferenceIndex) -> BatchReport {
    let mut decisions = Vec::with_capacity(rows.len());
    let mut kol_count = 0;
    let mut organic_count = 0;
    let mut instagram_tally = MentionTally::new();
    let mut tiktok_tally = MentionTally::new();

    for row in rows {
        let decision = classify(row, index);
        match decision.creator_type {
            CreatorType::Kol => {
                kol_count += 1;
                if let Some(link) = decision.matched_link.as_deref() {
                    let author = row.author.trim_end();
                    match row.channel.as_str() {
                        CHANNEL_INSTAGRAM => instagram_tally.record(author, link),
                        CHANNEL_TIKTOK => tiktok_tally.record(author, link),
                        _ => {}
                    }
                }
            }
            CreatorType::Organic => organic_count += 1,
            CreatorType::Unclassified => {}
        }
        decisions.push(decision);
    }

    tracing::debug!(
        rows = rows.len(),
        kol = kol_count,
        organic = organic_count,
        "classified batch"
    );

    BatchReport {
        decisions,
        kol_count,
        organic_count,
        instagram_summary: instagram_tally.into_summary(),
        tiktok_summary: tiktok_tally.into_summary(),
    }
}

#[cfg(test)]
mod tests {
    use kolmatch_core::ReferenceRecord;

    use super::*;

    fn row(channel: &str, author: &str, link_url: &str) -> MentionRow {
        MentionRow {
            channel: channel.to_owned(),
            author: author.to_owned(),
            link_url: link_url.to_owned(),
        }
    }

    /// Roster: alice on Instagram, @bob on TikTok.
    fn reference_index() -> ReferenceIndex {
        ReferenceIndex::build(&[
            ReferenceRecord {
                instagram_author: Some("alice".to_owned()),
                tiktok_link: None,
            },
            ReferenceRecord {
                instagram_author: None,
                tiktok_link: Some("tiktok.com/@bob/".to_owned()),
            },
        ])
    }

    #[test]
    fn mixed_batch_classifies_kol_organic_kol_organic() {
        let rows = vec![
            row("Instagram", "alice", ""),
            row("Instagram", "carol", ""),
            row("TikTok", "x", "tiktok.com/@bob?x=1"),
            row("TikTok", "x", "tiktok.com/@dave"),
        ];
        let report = classify_batch(&rows, &reference_index());

        let types: Vec<CreatorType> = report
            .decisions
            .iter()
            .map(|d| d.creator_type)
            .collect();
        assert_eq!(
            types,
            [
                CreatorType::Kol,
                CreatorType::Organic,
                CreatorType::Kol,
                CreatorType::Organic,
            ]
        );
        assert_eq!(report.kol_count, 2);
        assert_eq!(report.organic_count, 2);
    }

    #[test]
    fn kol_pairs_land_in_their_platform_summaries() {
        let rows = vec![
            row("Instagram", "alice", ""),
            row("TikTok", "x", "tiktok.com/@bob"),
        ];
        let report = classify_batch(&rows, &reference_index());

        assert_eq!(report.instagram_summary.len(), 1);
        assert_eq!(report.instagram_summary[0].author, "alice");
        assert_eq!(report.instagram_summary[0].link_url, "-");

        assert_eq!(report.tiktok_summary.len(), 1);
        assert_eq!(report.tiktok_summary[0].author, "x");
        assert_eq!(report.tiktok_summary[0].link_url, "tiktok.com/@bob/");
    }

    #[test]
    fn duplicate_kol_rows_aggregate_with_count_two() {
        let rows = vec![
            row("TikTok", "x", "tiktok.com/@bob"),
            row("TikTok", "x", "tiktok.com/@bob?lang=en"),
        ];
        let report = classify_batch(&rows, &reference_index());
        assert_eq!(report.tiktok_summary.len(), 1);
        assert_eq!(report.tiktok_summary[0].mentions, 2);
    }

    #[test]
    fn blank_instagram_author_excluded_from_counts_and_summaries() {
        let rows = vec![row("Instagram", "  ", "")];
        let report = classify_batch(&rows, &reference_index());
        assert_eq!(report.decisions[0].creator_type, CreatorType::Unclassified);
        assert_eq!(report.kol_count, 0);
        assert_eq!(report.organic_count, 0);
        assert!(report.instagram_summary.is_empty());
    }

    #[test]
    fn muted_channels_contribute_to_nothing() {
        let rows = vec![
            row("Forum", "alice", "tiktok.com/@bob"),
            row("Online Media", "alice", ""),
            row("Blog", "", ""),
        ];
        let report = classify_batch(&rows, &reference_index());
        assert_eq!(report.kol_count, 0);
        assert_eq!(report.organic_count, 0);
        assert!(report.instagram_summary.is_empty());
        assert!(report.tiktok_summary.is_empty());
    }

    #[test]
    fn tallied_author_is_trailing_trimmed() {
        let rows = vec![row("Instagram", "alice  ", "")];
        let report = classify_batch(&rows, &reference_index());
        assert_eq!(report.instagram_summary[0].author, "alice");
    }

    #[test]
    fn classification_is_deterministic() {
        let rows = vec![
            row("Instagram", "alice", ""),
            row("TikTok", "x", "tiktok.com/@bob"),
            row("Forum", "y", ""),
            row("Twitter", "z", ""),
        ];
        let index = reference_index();
        let first = classify_batch(&rows, &index);
        let second = classify_batch(&rows, &index);
        assert_eq!(first, second);
    }
}
