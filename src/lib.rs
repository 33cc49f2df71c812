//! gentree - a directory tree listing that hides simulator and build clutter

pub mod error;
pub mod output;
pub mod root;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{BufferedFormatter, OutputConfig, StreamingFormatter, render_to_string};
pub use root::resolve_root;
pub use tree::{
    EntryKind, ExclusionRules, StreamingOutput, StreamingWalker, WalkSummary, WalkerConfig,
    depth_from_level,
};
