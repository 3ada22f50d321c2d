//! In-memory collection of entries

use crate::domain::{Entry, IdGenerator};
use crate::error::{DiscshelfError, Result};
use chrono::Utc;
use std::collections::HashSet;

/// Editable fields for a new entry
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub media_type: String,
    pub purchase_date: String,
    pub memo: String,
}

/// Partial update for an existing entry; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub media_type: Option<String>,
    pub purchase_date: Option<String>,
    pub memo: Option<String>,
}

/// The owned, ordered collection of entries.
///
/// Order carries no meaning beyond new entries being prepended; display
/// order is always derived by [`crate::domain::query`]. Persistence is the
/// caller's job: load at startup, save after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new(entries: Vec<Entry>) -> Self {
        Collection { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Exact title match, ignoring case and surrounding whitespace
    pub fn find_by_title(&self, title: &str) -> Option<&Entry> {
        let wanted = title.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.title.trim().to_lowercase() == wanted)
    }

    /// Create a new entry and prepend it to the collection
    pub fn add(&mut self, draft: EntryDraft, ids: &mut dyn IdGenerator) -> Result<&Entry> {
        let title = draft.title.trim().to_string();
        let media_type = draft.media_type.trim().to_string();
        validate(&title, &media_type)?;

        let entry = Entry {
            id: ids.generate(),
            title,
            media_type,
            purchase_date: draft.purchase_date.trim().to_string(),
            memo: draft.memo.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Overwrite the patched fields of the entry with the given id.
    ///
    /// Returns `None` when no entry matches; the collection is untouched
    /// and no error is raised.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<Option<&Entry>> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let current = &self.entries[index];
        let title = patch
            .title
            .unwrap_or_else(|| current.title.clone())
            .trim()
            .to_string();
        let media_type = patch
            .media_type
            .unwrap_or_else(|| current.media_type.clone())
            .trim()
            .to_string();
        validate(&title, &media_type)?;

        let entry = &mut self.entries[index];
        entry.title = title;
        entry.media_type = media_type;
        if let Some(purchase_date) = patch.purchase_date {
            entry.purchase_date = purchase_date.trim().to_string();
        }
        if let Some(memo) = patch.memo {
            entry.memo = memo.trim().to_string();
        }
        entry.updated_at = Some(Utc::now());

        Ok(Some(&self.entries[index]))
    }

    /// Remove the entry with the given id; `false` when no entry matches
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Discard the current entries in favor of the imported ones
    pub fn replace_all(&mut self, imported: Vec<Entry>) {
        self.entries = imported;
    }

    /// Prepend imported entries ahead of the current ones.
    ///
    /// Ids stay unique across the collection: an imported record whose id
    /// is already present (or repeated within the import) is skipped and
    /// the existing record wins. Returns the number of entries added.
    pub fn merge_front(&mut self, imported: Vec<Entry>) -> usize {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();

        let mut merged: Vec<Entry> = Vec::new();
        for entry in imported {
            if seen.insert(entry.id.clone()) {
                merged.push(entry);
            }
        }

        let added = merged.len();
        merged.append(&mut self.entries);
        self.entries = merged;
        added
    }
}

fn validate(title: &str, media_type: &str) -> Result<()> {
    if title.is_empty() {
        return Err(DiscshelfError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if media_type.is_empty() {
        return Err(DiscshelfError::Validation(
            "media type must not be empty".to_string(),
        ));
    }
    Ok(())
}
