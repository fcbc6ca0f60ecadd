//! CSV decoding of the exported roster sheet.

use kolmatch_core::ReferenceRecord;

use crate::error::RosterError;

/// Header of the Instagram author column in the roster sheet.
pub const INSTAGRAM_AUTHOR_HEADER: &str = "Author Name Instagram";
/// Header of the TikTok link column in the roster sheet.
pub const TIKTOK_LINK_HEADER: &str = "Link Tiktok";

/// Decodes a roster CSV body into reference records.
///
/// Columns are addressed by header name so the sheet may carry any number of
/// extra columns in any order. Blank cells become `None`; a row where both
/// cells are blank is carried as an empty record and excluded later by the
/// index builder.
///
/// # Errors
///
/// - [`RosterError::MissingColumns`] when neither roster column is present.
/// - [`RosterError::Decode`] when the body is not readable as CSV.
pub fn parse_roster(body: &[u8]) -> Result<Vec<ReferenceRecord>, RosterError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(body);

    let headers = reader
        .headers()
        .map_err(|source| RosterError::Decode { source })?
        .clone();
    let instagram_idx = headers.iter().position(|h| h == INSTAGRAM_AUTHOR_HEADER);
    let tiktok_idx = headers.iter().position(|h| h == TIKTOK_LINK_HEADER);

    if instagram_idx.is_none() && tiktok_idx.is_none() {
        return Err(RosterError::MissingColumns {
            headers: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| RosterError::Decode { source })?;
        let cell = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| row.get(i))
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned)
        };
        records.push(ReferenceRecord {
            instagram_author: cell(instagram_idx),
            tiktok_link: cell(tiktok_idx),
        });
    }

    Ok(records)
}
