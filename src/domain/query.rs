//! Pure filter + sort queries over the collection

use crate::domain::Entry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display sort order for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Title ascending
    Title,
    /// Title descending
    TitleDesc,
    /// Effective date ascending
    Oldest,
    /// Effective date descending
    #[default]
    Newest,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Title => "title",
            SortMode::TitleDesc => "title-desc",
            SortMode::Oldest => "oldest",
            SortMode::Newest => "newest",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortMode::Title),
            "title-desc" => Ok(SortMode::TitleDesc),
            "oldest" => Ok(SortMode::Oldest),
            "newest" => Ok(SortMode::Newest),
            _ => Err(format!("Invalid sort mode: {}", s)),
        }
    }
}

/// Filter and sort the collection for display.
///
/// Pure: returns fresh clones and never touches the input order. A media
/// filter of "all" or "" matches every entry; the search text matches
/// case-insensitively against title and memo together.
pub fn query(entries: &[Entry], search: &str, media_filter: &str, sort: SortMode) -> Vec<Entry> {
    let needle = search.trim().to_lowercase();
    let match_all_media = media_filter.is_empty() || media_filter == "all";

    let mut matches: Vec<Entry> = entries
        .iter()
        .filter(|entry| {
            let matches_media = match_all_media || entry.media_type == media_filter;
            let haystack = format!("{} {}", entry.title, entry.memo).to_lowercase();
            matches_media && (needle.is_empty() || haystack.contains(&needle))
        })
        .cloned()
        .collect();

    matches.sort_by(|a, b| match sort {
        // Lowercased code-point order; precomposed Hangul syllables are
        // laid out in dictionary order in Unicode, so Korean titles sort
        // the way a Korean-locale comparison would.
        SortMode::Title => title_key(a).cmp(&title_key(b)),
        SortMode::TitleDesc => title_key(b).cmp(&title_key(a)),
        SortMode::Oldest => a.effective_date().cmp(&b.effective_date()),
        SortMode::Newest => b.effective_date().cmp(&a.effective_date()),
    });

    matches
}

fn title_key(entry: &Entry) -> String {
    entry.title.to_lowercase()
}
