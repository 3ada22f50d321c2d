//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod backup;
pub mod edit_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod owned;
pub mod remove_entry;
pub mod stats;

pub use add_entry::add_entry;
pub use backup::{export_backup, import_backup, DEFAULT_BACKUP_FILENAME};
pub use edit_entry::edit_entry;
pub use init::init;
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use owned::ownership_status;
pub use remove_entry::remove_entry;
pub use stats::{collection_stats, CollectionStats};
