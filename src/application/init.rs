//! Initialize library use case

use crate::error::Result;
use crate::infrastructure::{Config, Library, LibraryRepository};
use std::fs;
use std::path::Path;

/// Initialize a new library at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = LibraryRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized discshelf library at {}", path.display());

    Ok(())
}
