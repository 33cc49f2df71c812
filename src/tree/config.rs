//! Configuration types for tree walkers

use super::filter::ExclusionRules;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Maximum nesting depth to list. `None` is unlimited; `Some(0)` lists
    /// nothing below the root, `Some(1)` only the root's children.
    pub max_depth: Option<usize>,
    pub rules: ExclusionRules,
}

/// Convert a signed `--level` value to a depth limit. Zero and negative
/// levels list nothing below the root.
pub fn depth_from_level(level: i64) -> usize {
    if level <= 0 {
        0
    } else {
        usize::try_from(level).unwrap_or(usize::MAX)
    }
}

impl WalkerConfig {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_rules(mut self, rules: ExclusionRules) -> Self {
        self.rules = rules;
        self
    }
}
