//! Backup export and import use cases

use crate::domain::{parse_import, Collection, ImportMode, Snapshot, UuidGenerator};
use crate::error::Result;
use crate::infrastructure::LibraryRepository;
use std::fs;
use std::path::{Path, PathBuf};

/// Default export filename when `--output` is not given
pub const DEFAULT_BACKUP_FILENAME: &str = "discshelf-backup.json";

/// Write a snapshot of the full collection to a JSON file.
///
/// Returns the number of exported entries and the file written.
pub fn export_backup(
    repository: &LibraryRepository,
    output: Option<PathBuf>,
) -> Result<(usize, PathBuf)> {
    let mut ids = UuidGenerator;
    let entries = repository.load_entries(&mut ids);

    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_FILENAME));
    let snapshot = Snapshot::new(&entries);
    fs::write(&path, snapshot.to_json()?)?;

    Ok((entries.len(), path))
}

/// Load a snapshot file into the collection.
///
/// A payload that is not array-shaped, or an empty one, fails with an
/// import-format error and leaves the existing collection untouched.
/// Returns the number of entries added to the collection; a merge skips
/// records whose id is already present.
pub fn import_backup(
    repository: &LibraryRepository,
    file: &Path,
    mode: ImportMode,
) -> Result<usize> {
    let contents = fs::read_to_string(file)?;

    let mut ids = UuidGenerator;
    let imported = parse_import(&contents, &mut ids)?;

    let mut collection = Collection::new(repository.load_entries(&mut ids));
    let count = match mode {
        ImportMode::Replace => {
            let count = imported.len();
            collection.replace_all(imported);
            count
        }
        ImportMode::Merge => collection.merge_front(imported),
    };

    repository.save_entries(collection.entries())?;
    Ok(count)
}
