//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Highlight directory names. Off by default so output is plain text.
    pub use_color: bool,
}

impl OutputConfig {
    pub fn colored() -> Self {
        Self { use_color: true }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }
}
