//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    // Held so the directory lives as long as the fixture.
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // Canonical so it matches what the binary sees as its cwd.
        let root = dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty file.
    pub fn touch(&self, path: &str) -> PathBuf {
        self.add_file(path, "")
    }

    /// Add a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a typical simulation workspace: sources next to the
    /// artifacts a VCS/Verdi run leaves behind.
    pub fn simulation_workspace() -> Self {
        let tree = Self::new();
        tree.touch("Makefile");
        tree.touch("rtl/alu.sv");
        tree.touch("rtl/top.sv");
        tree.touch("tb/tb_top.sv");
        tree.touch("simv");
        tree.touch("ucli.key");
        tree.touch("novas.rc");
        tree.touch("compile.log");
        tree.touch("sim/run.log");
        tree.touch("sim/waves.fsdb");
        tree.touch("sim/dump.vcd");
        tree.touch("csrc/objs/a.o");
        tree.touch("simv.daidir/binmap.sdb");
        tree.touch("verdiLog/turbo.log");
        tree.touch("work/_info");
        tree.touch(".git/HEAD");
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
