//! discshelf - Terminal disc-collection tracker
//!
//! A command-line application that tracks physical disc purchases
//! (Blu-ray, DVD, 4K UHD, ...) in a per-directory library, with text
//! search, media-type filtering, sorting and JSON backup/restore.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiscshelfError;
