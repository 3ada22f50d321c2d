//! Edit entry use case

use crate::domain::{Collection, Entry, EntryPatch, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::LibraryRepository;

/// Overwrite the patched fields of the matching entry and persist.
///
/// Returns `None` without touching the collection when the id is unknown.
pub fn edit_entry(
    repository: &LibraryRepository,
    id: &str,
    patch: EntryPatch,
) -> Result<Option<Entry>> {
    let mut ids = UuidGenerator;
    let mut collection = Collection::new(repository.load_entries(&mut ids));

    let Some(entry) = collection.update(id, patch)?.cloned() else {
        return Ok(None);
    };

    repository.save_entries(collection.entries())?;
    Ok(Some(entry))
}
