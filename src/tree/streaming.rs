//! StreamingWalker - streams output without building the tree in memory

use std::path::Path;

use super::config::WalkerConfig;
use super::traversal::BaseTraversal;

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// Emit one line. The root is emitted first with `is_root` set and an
    /// empty prefix; every other node carries its connector choice via
    /// `is_last` and the indentation of its parent in `prefix`.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> std::io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> std::io::Result<()>;
}

/// Counts of entries emitted during a walk (the root line is not counted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

/// Depth-first walker that writes each kept entry as soon as it is listed.
/// Memory use is O(depth): only the current prefix and one sibling list per
/// level are held at a time.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Emit `root` followed by its filtered tree.
    ///
    /// Directories that cannot be listed contribute no lines; only failures
    /// of the output sink are returned as errors.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> std::io::Result<WalkSummary> {
        output.output_node(&root.display().to_string(), true, true, "", true)?;

        let mut summary = WalkSummary::default();
        self.walk_dir_streaming(root, "", 0, output, &mut summary)?;
        output.finish(&summary)?;
        Ok(summary)
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> std::io::Result<()> {
        let base = BaseTraversal::new(&self.config);

        if base.at_max_depth(depth) {
            return Ok(());
        }

        let entries = match base.read_and_filter_entries(path) {
            Some(entries) => entries,
            None => return Ok(()),
        };

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == count - 1;
            output.output_node(&entry.name, entry.is_dir(), is_last, prefix, false)?;

            if entry.is_dir() {
                summary.dirs += 1;
                let child_prefix = base.calculate_child_prefix(prefix, is_last);
                self.walk_dir_streaming(&entry.path, &child_prefix, depth + 1, output, summary)?;
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}
