//! Classified batch writing and summary rendering.

use std::io::Write;

use kolmatch_engine::{MentionSummaryRow, RowDecision};

use crate::batch::{BatchError, InputBatch};

pub const CREATOR_TYPE_HEADER: &str = "Creator Type";

/// Writes the classified batch: every original column and cell preserved,
/// with a "Creator Type" column inserted at the Author column's position.
///
/// # Errors
///
/// Returns [`BatchError::Csv`] if a record cannot be written.
pub fn write_classified<W: Write>(
    writer: W,
    batch: &InputBatch,
    decisions: &[RowDecision],
) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let width = batch.headers.len();

    csv_writer.write_record(with_inserted(
        &batch.headers,
        width,
        batch.author_idx,
        CREATOR_TYPE_HEADER,
    ))?;

    for (row, decision) in batch.rows.iter().zip(decisions) {
        csv_writer.write_record(with_inserted(
            row,
            width,
            batch.author_idx,
            decision.creator_type.as_cell(),
        ))?;
    }

    csv_writer.flush().map_err(BatchError::Io)?;
    Ok(())
}

/// Rebuilds a record padded to `width` cells with `value` inserted at `idx`,
/// keeping the output rectangular even when the input row was short.
fn with_inserted(record: &csv::StringRecord, width: usize, idx: usize, value: &str) -> Vec<String> {
    let mut cells: Vec<String> = record.iter().map(str::to_owned).collect();
    while cells.len() < width {
        cells.push(String::new());
    }
    cells.insert(idx, value.to_owned());
    cells
}

/// Renders one platform's mention summary as an aligned text table.
#[must_use]
pub fn render_summary(title: &str, rows: &[MentionSummaryRow]) -> String {
    let author_width = rows
        .iter()
        .map(|row| row.author.len())
        .chain(["Author".len()])
        .max()
        .unwrap_or(0);
    let link_width = rows
        .iter()
        .map(|row| row.link_url.len())
        .chain(["Link URL".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "{:<author_width$}  {:<link_width$}  Mention\n",
        "Author", "Link URL"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<author_width$}  {:<link_width$}  {:>7}\n",
            row.author, row.link_url, row.mentions
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use kolmatch_core::CreatorType;
    use kolmatch_engine::RowDecision;

    use super::*;
    use crate::batch::read_batch;

    fn decision(creator_type: CreatorType) -> RowDecision {
        RowDecision {
            creator_type,
            matched_link: None,
        }
    }

    fn classified(input: &[u8], decisions: &[RowDecision]) -> String {
        let batch = read_batch(input).unwrap();
        let mut out = Vec::new();
        write_classified(&mut out, &batch, decisions).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn creator_type_column_lands_at_the_author_position() {
        let out = classified(
            b"Channel,Author,Link URL\nInstagram,alice,x\n",
            &[decision(CreatorType::Kol)],
        );
        assert_eq!(
            out,
            "Channel,Creator Type,Author,Link URL\nInstagram,KOL,alice,x\n"
        );
    }

    #[test]
    fn unclassified_rows_get_a_blank_cell() {
        let out = classified(
            b"Channel,Author\nForum,anyone\n",
            &[decision(CreatorType::Unclassified)],
        );
        assert_eq!(out, "Channel,Creator Type,Author\nForum,,anyone\n");
    }

    #[test]
    fn original_cells_preserved_around_the_insertion() {
        let out = classified(
            b"No,Author,Notes\n7,alice,keep me\n",
            &[decision(CreatorType::Organic)],
        );
        assert_eq!(out, "No,Creator Type,Author,Notes\n7,Organic,alice,keep me\n");
    }

    #[test]
    fn short_rows_padded_to_the_insertion_point() {
        let out = classified(
            b"Channel,No,Author\nInstagram\n",
            &[decision(CreatorType::Organic)],
        );
        assert_eq!(out, "Channel,No,Creator Type,Author\nInstagram,,Organic,\n");
    }

    #[test]
    fn render_summary_aligns_columns() {
        let rows = vec![
            MentionSummaryRow {
                author: "alice".to_owned(),
                link_url: "tiktok.com/@alice".to_owned(),
                mentions: 2,
            },
            MentionSummaryRow {
                author: "a.much.longer.name".to_owned(),
                link_url: "-".to_owned(),
                mentions: 1,
            },
        ];
        let table = render_summary("Instagram KOL tracking", &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Instagram KOL tracking");
        assert!(lines[1].starts_with("Author"));
        assert!(lines[2].contains("alice"));
        assert!(lines[2].contains("tiktok.com/@alice"));
        assert!(lines[3].contains("a.much.longer.name"));
        // Both data lines end at the same width for the count column.
        assert_eq!(lines[2].len(), lines[3].len());
    }
}
