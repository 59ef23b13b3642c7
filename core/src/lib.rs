pub mod join;
pub mod models;
pub mod query;
pub mod string_normalization;

// Re-export commonly used items
pub use join::{combine, flatten_shows};
pub use models::{CombinedRecord, MemberLink, PerformerRecord, RelationIndex, RelationRecord, Show};
pub use query::{filter, find_by_id};
