//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Line rendering shared by all formatters
//! - `streaming` - Streaming formatter for console output
//! - `buffered` - In-memory formatter

mod buffered;
mod config;
mod streaming;
mod utils;

// Re-export public types and functions
pub use buffered::{BufferedFormatter, render_to_string};
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use utils::{LAST_CONNECTOR, MIDDLE_CONNECTOR, connector, write_node_line};
