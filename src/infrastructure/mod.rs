//! Infrastructure layer - File system persistence and configuration

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{Library, LibraryRepository};
