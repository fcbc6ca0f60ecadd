//! Canonical-username extraction from noisy identity strings.
//!
//! Mention links come straight from the platforms and are always well-formed
//! profile URLs, so the mention side needs exactly one pattern. Roster links
//! are pasted by hand and arrive in a superset of shapes, so the roster side
//! tries several patterns in a fixed precedence order. See
//! [`crate::index`] for how these compose into the reference index.

use regex::Regex;

/// Normalizes an Instagram author cell to its matching key.
///
/// Instagram identities are matched verbatim, not via URL parsing: trailing
/// whitespace is stripped, leading and internal characters and case are
/// preserved. Returns `None` for a blank cell.
#[must_use]
pub fn instagram_author(raw: &str) -> Option<&str> {
    let name = raw.trim_end();
    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Extracts the canonical TikTok username from a mention link.
///
/// Takes the substring following `tiktok.com/@` up to the first `/`, `?`, or
/// whitespace. Returns `None` when the `tiktok.com/@<name>` pattern is absent.
#[must_use]
pub fn tiktok_username_from_mention(url: &str) -> Option<String> {
    let re = Regex::new(r"tiktok\.com/@([^/?\s]+)").expect("valid mention username regex");
    re.captures(url)
        .map(|caps| caps[1].trim().to_owned())
        .filter(|name| !name.is_empty())
}

/// Extracts the canonical TikTok username from a hand-entered roster link.
///
/// Accepted shapes, in precedence order:
/// 1. `@` immediately after the domain — `tiktok.com/@name?...`,
///    `tiktok.com/@name/...`, `tiktok.com/@name`.
/// 2. Domain without `@` — `tiktok.com/name?...`, `tiktok.com/name/...`,
///    `tiktok.com/name`.
/// 3. A bare `@name` token with no domain.
///
/// Anything else returns `None`. Extracted usernames are trimmed of
/// surrounding whitespace.
#[must_use]
pub fn tiktok_username_from_roster(link: &str) -> Option<String> {
    let link = link.trim();

    if link.contains("tiktok.com/@") {
        return tiktok_username_from_mention(link);
    }

    if link.contains("tiktok.com/") {
        let re = Regex::new(r"tiktok\.com/([^/?\s]+)").expect("valid roster username regex");
        return re
            .captures(link)
            .map(|caps| caps[1].trim().to_owned())
            .filter(|name| !name.is_empty());
    }

    if let Some(rest) = link.strip_prefix('@') {
        let name = rest.trim();
        if !name.is_empty() {
            return Some(name.to_owned());
        }
    }

    None
}
