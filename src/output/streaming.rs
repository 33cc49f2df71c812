//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! straight to stdout as the walker produces them.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream};

use crate::tree::{StreamingOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::write_node_line;

/// Streaming output formatter - outputs directly to stdout without buffering.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        // Color detection happens at the CLI layer.
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl StreamingOutput for StreamingFormatter {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        write_node_line(&mut self.stdout, name, is_dir, is_last, prefix, is_root)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.stdout.flush()
    }
}
