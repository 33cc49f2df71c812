//! Buffered tree formatter
//!
//! `BufferedFormatter` collects the rendered tree in memory so callers can
//! compare or post-process it as a string.

use std::io;

use termcolor::Buffer;

use crate::tree::{StreamingOutput, StreamingWalker, WalkSummary, WalkerConfig};

use super::config::OutputConfig;
use super::utils::write_node_line;

pub struct BufferedFormatter {
    buffer: Buffer,
    summary: Option<WalkSummary>,
}

impl BufferedFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let buffer = if config.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        Self {
            buffer,
            summary: None,
        }
    }

    /// Counts reported by the walker, once the walk has finished.
    pub fn summary(&self) -> Option<WalkSummary> {
        self.summary
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.buffer.as_slice()).into_owned()
    }

    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.buffer.into_inner()).into_owned()
    }
}

impl StreamingOutput for BufferedFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        write_node_line(&mut self.buffer, name, is_dir, is_last, prefix, is_root)
    }

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        self.summary = Some(*summary);
        Ok(())
    }
}

/// Walk `root` and return the plain-text rendering.
pub fn render_to_string(root: &std::path::Path, config: WalkerConfig) -> io::Result<String> {
    let mut formatter = BufferedFormatter::new(OutputConfig::plain());
    StreamingWalker::new(config).walk_streaming(root, &mut formatter)?;
    Ok(formatter.into_string())
}
