//! List entries use case

use crate::domain::{query, Entry, SortMode, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::{Library, LibraryRepository};

/// Run a filter + sort query over the collection.
///
/// When no sort mode is given, the library's configured default applies.
pub fn list_entries(
    repository: &LibraryRepository,
    search: &str,
    media_filter: &str,
    sort: Option<SortMode>,
) -> Result<Vec<Entry>> {
    let sort = match sort {
        Some(sort) => sort,
        None => repository.load_config()?.default_sort,
    };

    let mut ids = UuidGenerator;
    let entries = repository.load_entries(&mut ids);

    Ok(query(&entries, search, media_filter, sort))
}
