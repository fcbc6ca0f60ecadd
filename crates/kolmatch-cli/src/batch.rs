//! Input batch reading.
//!
//! The batch is a CSV export of the mention spreadsheet. Only "Author" is
//! required — its absence aborts the run before any row is processed.
//! "Channel" and "Link URL" are read when present and default to empty
//! strings otherwise, so their absence degrades to no-match classification
//! rather than failure.

use std::io::Read;

use csv::StringRecord;
use thiserror::Error;

use kolmatch_core::MentionRow;

pub const AUTHOR_HEADER: &str = "Author";
pub const CHANNEL_HEADER: &str = "Channel";
pub const LINK_URL_HEADER: &str = "Link URL";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read batch: {0}")]
    Io(#[from] std::io::Error),

    #[error("batch CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("batch is missing the required \"Author\" column")]
    MissingAuthorColumn,
}

/// One parsed input batch: the verbatim CSV rows for round-tripping into the
/// output file, plus the extracted mention fields for classification.
#[derive(Debug)]
pub struct InputBatch {
    pub headers: StringRecord,
    /// Position of the "Author" column; the decision column is inserted here.
    pub author_idx: usize,
    pub rows: Vec<StringRecord>,
    pub mentions: Vec<MentionRow>,
}

/// Reads an input batch, verifying the schema before any row is consumed.
///
/// # Errors
///
/// - [`BatchError::MissingAuthorColumn`] when the "Author" header is absent.
/// - [`BatchError::Csv`] when the body is not readable as CSV.
pub fn read_batch<R: Read>(reader: R) -> Result<InputBatch, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let author_idx = headers
        .iter()
        .position(|h| h == AUTHOR_HEADER)
        .ok_or(BatchError::MissingAuthorColumn)?;
    let channel_idx = headers.iter().position(|h| h == CHANNEL_HEADER);
    let link_idx = headers.iter().position(|h| h == LINK_URL_HEADER);

    let mut rows = Vec::new();
    let mut mentions = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cell =
            |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").to_owned();
        mentions.push(MentionRow {
            channel: cell(channel_idx),
            author: cell(Some(author_idx)),
            link_url: cell(link_idx),
        });
        rows.push(record);
    }

    Ok(InputBatch {
        headers,
        author_idx,
        rows,
        mentions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_channel_author_and_link() {
        let body = b"Channel,Author,Link URL\nInstagram,alice,https://instagram.com/p/1\n";
        let batch = read_batch(&body[..]).unwrap();
        assert_eq!(batch.author_idx, 1);
        assert_eq!(batch.mentions.len(), 1);
        assert_eq!(batch.mentions[0].channel, "Instagram");
        assert_eq!(batch.mentions[0].author, "alice");
        assert_eq!(batch.mentions[0].link_url, "https://instagram.com/p/1");
    }

    #[test]
    fn missing_author_column_fails_before_any_row() {
        let body = b"Channel,Link URL\nInstagram,x\n";
        let err = read_batch(&body[..]).unwrap_err();
        assert!(matches!(err, BatchError::MissingAuthorColumn));
    }

    #[test]
    fn missing_channel_and_link_default_to_empty() {
        let body = b"No,Author\n1,alice\n";
        let batch = read_batch(&body[..]).unwrap();
        assert_eq!(batch.mentions[0].channel, "");
        assert_eq!(batch.mentions[0].author, "alice");
        assert_eq!(batch.mentions[0].link_url, "");
    }

    #[test]
    fn short_rows_default_missing_cells_to_empty() {
        let body = b"Channel,Author,Link URL\nInstagram\n";
        let batch = read_batch(&body[..]).unwrap();
        assert_eq!(batch.mentions[0].channel, "Instagram");
        assert_eq!(batch.mentions[0].author, "");
        assert_eq!(batch.mentions[0].link_url, "");
    }

    #[test]
    fn original_rows_kept_verbatim() {
        let body = b"Channel,Author,Link URL,Notes\nTikTok,x,tiktok.com/@bob,keep me\n";
        let batch = read_batch(&body[..]).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rows[0].get(3), Some("keep me"));
    }

    #[test]
    fn empty_batch_has_no_rows() {
        let body = b"Channel,Author,Link URL\n";
        let batch = read_batch(&body[..]).unwrap();
        assert!(batch.rows.is_empty());
        assert!(batch.mentions.is_empty());
    }
}
