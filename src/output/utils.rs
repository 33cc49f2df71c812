//! Line rendering shared by the stdout and in-memory formatters

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// Connector drawn before the last entry of a directory.
pub const LAST_CONNECTOR: &str = "└── ";
/// Connector drawn before every other entry.
pub const MIDDLE_CONNECTOR: &str = "├── ";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CONNECTOR } else { MIDDLE_CONNECTOR }
}

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

/// Write one tree line: `prefix + connector + name`, or just `name` for the
/// root. Directory names are highlighted when the writer supports color.
pub fn write_node_line<W: WriteColor>(
    out: &mut W,
    name: &str,
    is_dir: bool,
    is_last: bool,
    prefix: &str,
    is_root: bool,
) -> io::Result<()> {
    if !is_root {
        write!(out, "{}{}", prefix, connector(is_last))?;
    }

    if is_dir {
        out.set_color(&dir_spec())?;
        write!(out, "{}", name)?;
        out.reset()?;
    } else {
        write!(out, "{}", name)?;
    }
    writeln!(out)
}
