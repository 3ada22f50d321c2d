//! Remove entry use case

use crate::domain::{Collection, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::LibraryRepository;

/// Delete the matching entry and persist; `false` when the id is unknown.
pub fn remove_entry(repository: &LibraryRepository, id: &str) -> Result<bool> {
    let mut ids = UuidGenerator;
    let mut collection = Collection::new(repository.load_entries(&mut ids));

    if !collection.remove(id) {
        return Ok(false);
    }

    repository.save_entries(collection.entries())?;
    Ok(true)
}
