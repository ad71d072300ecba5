pub mod dates;
pub mod formatting;
pub mod journal;
pub mod storage;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use dates::{DateError, parse_dates, resolve_dates};
pub use formatting::{LineTransformer, Pipeline, format_entry};
pub use journal::{render_entries, render_entry};
pub use storage::{StorageError, load_daily_entries};
