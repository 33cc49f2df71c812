//! Directory tree walking logic
//!
//! The walker lists one directory at a time, hides entries matched by the
//! exclusion rules, and streams each surviving entry to a `StreamingOutput`
//! sink in depth-first, name-sorted order.

mod config;
mod filter;
mod streaming;
mod traversal;

// Re-export public types
pub use config::{WalkerConfig, depth_from_level};
pub use filter::{EXCLUDED_DIRS, EXCLUDED_EXTENSIONS, EXCLUDED_FILES, EntryKind, ExclusionRules};
pub use streaming::{StreamingOutput, StreamingWalker, WalkSummary};
pub use traversal::{DirectoryEntry, entry_kind};
