//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "discshelf")]
#[command(about = "Track your physical disc collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new library
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a new entry to the collection
    Add {
        /// Disc title
        title: String,

        /// Media type (Blu-ray, DVD, 4K UHD, Steelbook, ...)
        #[arg(short, long)]
        media: String,

        /// Purchase date (YYYY-MM-DD)
        #[arg(short, long)]
        purchased: Option<String>,

        /// Free-form note
        #[arg(long, default_value = "")]
        memo: String,
    },

    /// Edit fields of an existing entry
    Edit {
        /// Entry id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        media: Option<String>,

        #[arg(short, long)]
        purchased: Option<String>,

        #[arg(long)]
        memo: Option<String>,
    },

    /// Remove an entry
    Remove {
        /// Entry id
        id: String,
    },

    /// List entries with optional search, media filter and sort
    List {
        /// Case-insensitive text search over title and memo
        #[arg(short, long, default_value = "")]
        search: String,

        /// Media type to filter by ("all" shows everything)
        #[arg(short, long, default_value = "all")]
        media: String,

        /// Sort mode (newest, oldest, title, title-desc)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show aggregate counts
    Stats,

    /// Check whether a title is already in the collection
    Owned {
        /// Exact title to look up
        title: String,
    },

    /// Export the collection to a backup file
    Export {
        /// Output file (default: discshelf-backup.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from a backup file
    Import {
        /// Backup file to read
        file: PathBuf,

        /// Prepend imported entries instead of replacing the collection
        #[arg(long)]
        merge: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
