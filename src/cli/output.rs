//! Output formatting utilities

use crate::application::CollectionStats;
use crate::domain::Entry;

/// Format a list of entries for display, one line per entry plus a
/// trailing result count
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        if entry.purchase_date.is_empty() {
            output.push_str(&format!(
                "            [{}]  {}  ({})\n",
                entry.media_type, entry.title, entry.id
            ));
        } else {
            output.push_str(&format!(
                "{}  [{}]  {}  ({})\n",
                entry.purchase_date, entry.media_type, entry.title, entry.id
            ));
        }
        if !entry.memo.is_empty() {
            output.push_str(&format!("            {}\n", entry.memo));
        }
    }

    output.push_str(&format_count(entries.len()));
    output
}

/// "1 entry" / "N entries"
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

/// Format aggregate counts
pub fn format_stats(stats: &CollectionStats) -> String {
    let mut output = format!("Total: {}\n", stats.total);
    for (media, count) in &stats.by_media {
        output.push_str(&format!("  {}: {}\n", media, count));
    }
    output
}

/// Format the result of an ownership lookup
pub fn format_ownership(title: &str, entry: Option<&Entry>) -> String {
    match entry {
        Some(entry) if entry.purchase_date.is_empty() => {
            format!("Purchase record found: \"{}\" ({})", entry.title, entry.media_type)
        }
        Some(entry) => format!(
            "Purchase record found: \"{}\" ({}, {})",
            entry.title, entry.media_type, entry.purchase_date
        ),
        None => format!("No purchase record for \"{}\"", title),
    }
}
