//! Ownership check use case

use crate::domain::{Collection, Entry, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::LibraryRepository;

/// Look up a purchase record by exact title (case-insensitive).
pub fn ownership_status(repository: &LibraryRepository, title: &str) -> Result<Option<Entry>> {
    let mut ids = UuidGenerator;
    let collection = Collection::new(repository.load_entries(&mut ids));

    Ok(collection.find_by_title(title).cloned())
}
