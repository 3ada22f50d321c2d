//! Library repository - collection persistence and root discovery

use crate::domain::{Entry, IdGenerator, RawEntry};
use crate::error::{DiscshelfError, Result};
use crate::infrastructure::Config;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative path of the collection file inside the library root
const COLLECTION_FILE: &str = ".discshelf/collection.json";

/// Abstract repository for library-level operations
pub trait Library {
    /// Get the root directory of this library
    fn root(&self) -> &Path;

    /// Load configuration from .discshelf/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .discshelf/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .discshelf directory exists
    fn is_initialized(&self) -> bool;

    /// Create .discshelf directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of [`Library`]
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pub root: PathBuf,
}

impl LibraryRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        LibraryRepository { root }
    }

    /// Discover the library root.
    /// First checks the DISCSHELF_ROOT environment variable, then walks up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DISCSHELF_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_library_dir(&path) {
                return Ok(LibraryRepository::new(path));
            } else {
                return Err(DiscshelfError::Config(format!(
                    "DISCSHELF_ROOT is set to '{}' but no .discshelf directory found. \
                    Run 'discshelf init' in that directory or unset DISCSHELF_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the library root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_library_dir(&current) {
                return Ok(LibraryRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DiscshelfError::NotLibraryDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .discshelf directory
    fn has_library_dir(path: &Path) -> bool {
        path.join(".discshelf").is_dir()
    }
}

impl Library for LibraryRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_library_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let discshelf_dir = self.root.join(".discshelf");

        if discshelf_dir.exists() {
            return Err(DiscshelfError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&discshelf_dir)?;
        Ok(())
    }
}

// Collection file operations (not part of trait - filesystem-specific)
impl LibraryRepository {
    fn collection_path(&self) -> PathBuf {
        self.root.join(COLLECTION_FILE)
    }

    /// Load the collection from .discshelf/collection.json.
    ///
    /// A missing file or one that does not hold a JSON array degrades to
    /// the empty collection with a warning on stderr; this never fails.
    /// Every record is normalized on the way in.
    pub fn load_entries(&self, ids: &mut dyn IdGenerator) -> Vec<Entry> {
        let path = self.collection_path();

        if !path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Warning: could not read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        let records: Vec<RawEntry> = match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                eprintln!(
                    "Warning: {} is not a valid collection, starting empty: {}",
                    path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let now = Utc::now();
        records
            .into_iter()
            .map(|raw| raw.normalize(ids, now))
            .collect()
    }

    /// Save the whole collection, replacing the previous file.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place so a crash mid-write cannot leave a half-written collection.
    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        let path = self.collection_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;

        let tmp_name = format!("collection.json.tmp-{}", std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
