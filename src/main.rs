//! CLI entry point for gentree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use gentree::{
    Error, OutputConfig, StreamingFormatter, StreamingWalker, WalkerConfig, depth_from_level,
    resolve_root,
};
use tracing::{Level, debug};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color directories when stdout is a terminal and NO_COLOR is unset
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gentree")]
#[command(about = "Generate directory tree structure, hiding simulation artifacts")]
#[command(version)]
struct Args {
    /// Root directory path to generate tree from
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Max recursion depth (level)
    #[arg(short = 'L', long = "level", allow_negative_numbers = true)]
    level: Option<i64>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "never")]
    color: ColorMode,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let root = match resolve_root(&args.path) {
        Ok(root) => root,
        // Reported on stdout alongside the regular listing.
        Err(e @ Error::RootNotFound { .. }) => {
            println!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("gentree: {}", e);
            process::exit(1);
        }
    };
    let max_depth = args.level.map(depth_from_level);
    debug!("rendering {} (max depth {:?})", root.display(), max_depth);

    let walker = StreamingWalker::new(WalkerConfig::default().with_max_depth(max_depth));
    let mut formatter = StreamingFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });

    match walker.walk_streaming(&root, &mut formatter) {
        Ok(summary) => debug!("{} directories, {} files", summary.dirs, summary.files),
        Err(e) => {
            eprintln!("gentree: {}", Error::from(e));
            process::exit(1);
        }
    }
}
