//! Add entry use case

use crate::domain::{Collection, Entry, EntryDraft, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::LibraryRepository;

/// Create a new entry, prepend it to the collection and persist.
pub fn add_entry(repository: &LibraryRepository, draft: EntryDraft) -> Result<Entry> {
    let mut ids = UuidGenerator;
    let mut collection = Collection::new(repository.load_entries(&mut ids));

    let entry = collection.add(draft, &mut ids)?.clone();
    repository.save_entries(collection.entries())?;

    Ok(entry)
}
