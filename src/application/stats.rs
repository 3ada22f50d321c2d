//! Aggregate counts use case

use crate::domain::UuidGenerator;
use crate::error::Result;
use crate::infrastructure::LibraryRepository;
use std::collections::BTreeMap;

/// Aggregate counts over the full collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub total: usize,
    /// Per-media-type counts, largest first (ties alphabetical)
    pub by_media: Vec<(String, usize)>,
}

/// Compute total and per-media-type counts.
pub fn collection_stats(repository: &LibraryRepository) -> Result<CollectionStats> {
    let mut ids = UuidGenerator;
    let entries = repository.load_entries(&mut ids);

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for entry in &entries {
        *counts.entry(entry.media_type.clone()).or_insert(0) += 1;
    }

    let mut by_media: Vec<(String, usize)> = counts.into_iter().collect();
    by_media.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(CollectionStats {
        total: entries.len(),
        by_media,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::add_entry::add_entry;
    use crate::domain::EntryDraft;
    use crate::infrastructure::Library;
    use tempfile::TempDir;

    #[test]
    fn test_stats_counts_by_media_type() {
        let temp = TempDir::new().unwrap();
        let repo = LibraryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        for (title, media) in [
            ("Dune", "Blu-ray"),
            ("Oldboy", "DVD"),
            ("Blade Runner", "Blu-ray"),
        ] {
            add_entry(
                &repo,
                EntryDraft {
                    title: title.to_string(),
                    media_type: media.to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        }

        let stats = collection_stats(&repo).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(
            stats.by_media,
            vec![("Blu-ray".to_string(), 2), ("DVD".to_string(), 1)]
        );
    }

    #[test]
    fn test_stats_empty_collection() {
        let temp = TempDir::new().unwrap();
        let repo = LibraryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let stats = collection_stats(&repo).unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.by_media.is_empty());
    }
}
