//! Domain layer - Entry model, collection and query engine

pub mod collection;
pub mod entry;
pub mod query;
pub mod snapshot;

pub use collection::{Collection, EntryDraft, EntryPatch};
pub use entry::{Entry, IdGenerator, RawEntry, UuidGenerator};
pub use query::{query, SortMode};
pub use snapshot::{parse_import, ImportMode, Snapshot};
