use serde::{Deserialize, Serialize};

/// One row of the reference roster of known influencers.
///
/// Both fields are optional: the roster is curated by hand and many rows
/// carry only one platform identity. Immutable once loaded; a record set
/// lives for exactly one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Instagram author name, matched verbatim after trailing-whitespace trim.
    pub instagram_author: Option<String>,
    /// TikTok profile link in whatever shape the curator pasted it.
    pub tiktok_link: Option<String>,
}

/// One content mention from the input batch.
///
/// Cells are carried as-is from the batch; trimming rules are applied at
/// classification time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRow {
    pub channel: String,
    pub author: String,
    pub link_url: String,
}

/// Classification outcome for one mention row.
///
/// `Unclassified` renders as an empty cell in the output batch and is
/// excluded from the KOL/Organic totals and from mention aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatorType {
    Kol,
    Organic,
    Unclassified,
}

impl CreatorType {
    /// The cell value written into the output batch's "Creator Type" column.
    #[must_use]
    pub fn as_cell(self) -> &'static str {
        match self {
            CreatorType::Kol => "KOL",
            CreatorType::Organic => "Organic",
            CreatorType::Unclassified => "",
        }
    }
}

impl std::fmt::Display for CreatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_cell())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kol_renders_as_kol_cell() {
        assert_eq!(CreatorType::Kol.as_cell(), "KOL");
    }

    #[test]
    fn organic_renders_as_organic_cell() {
        assert_eq!(CreatorType::Organic.as_cell(), "Organic");
    }

    #[test]
    fn unclassified_renders_as_blank_cell() {
        assert_eq!(CreatorType::Unclassified.as_cell(), "");
    }
}
