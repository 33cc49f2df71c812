//! Name-based exclusion rules for tree walking

use std::collections::HashSet;

/// Directory names that are never listed or descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    "csrc",
    "simv.daidir",
    "verdiLog",
    ".git",
    ".vscode",
    "__pycache__",
    "work",
    "AN.DB",
    "ucli.key",
];

/// File names that are never listed.
pub const EXCLUDED_FILES: &[&str] = &[
    "simv",
    "novas.conf",
    "novas.rc",
    ".DS_Store",
    "command.log",
    "compile.log",
];

/// File name suffixes that are never listed (waveform dumps, logs, keys).
pub const EXCLUDED_EXTENSIONS: &[&str] = &[".fsdb", ".vcd", ".vpd", ".key", ".evcd", ".log"];

/// Kind of a directory entry, as seen through symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Three immutable name sets deciding which entries are hidden.
///
/// Directory and file names are matched exactly; extensions are matched as
/// case-sensitive suffixes of the full file name.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    dirs: HashSet<&'static str>,
    files: HashSet<&'static str>,
    extensions: Vec<&'static str>,
}

impl ExclusionRules {
    pub fn new(
        dirs: &[&'static str],
        files: &[&'static str],
        extensions: &[&'static str],
    ) -> Self {
        Self {
            dirs: dirs.iter().copied().collect(),
            files: files.iter().copied().collect(),
            extensions: extensions.to_vec(),
        }
    }

    /// The rule set compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(EXCLUDED_DIRS, EXCLUDED_FILES, EXCLUDED_EXTENSIONS)
    }

    /// Rules that hide nothing.
    pub fn empty() -> Self {
        Self::new(&[], &[], &[])
    }

    pub fn is_excluded(&self, name: &str, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Directory => self.dirs.contains(name),
            EntryKind::File => {
                self.files.contains(name) || self.extensions.iter().any(|ext| name.ends_with(ext))
            }
        }
    }

    pub fn is_included(&self, name: &str, kind: EntryKind) -> bool {
        !self.is_excluded(name, kind)
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_dirs_exact_match() {
        let rules = ExclusionRules::builtin();
        assert!(rules.is_excluded("work", EntryKind::Directory));
        assert!(rules.is_excluded("simv.daidir", EntryKind::Directory));
        assert!(rules.is_excluded(".git", EntryKind::Directory));
        assert!(!rules.is_excluded("work2", EntryKind::Directory));
        assert!(!rules.is_excluded("Work", EntryKind::Directory));
        assert!(!rules.is_excluded("rtl", EntryKind::Directory));
    }

    #[test]
    fn test_dir_rules_do_not_apply_to_files() {
        let rules = ExclusionRules::builtin();
        // A regular file named like an excluded directory is kept
        assert!(rules.is_included("work", EntryKind::File));
        assert!(rules.is_included("csrc", EntryKind::File));
    }

    #[test]
    fn test_file_rules_do_not_apply_to_dirs() {
        let rules = ExclusionRules::builtin();
        assert!(rules.is_included("simv", EntryKind::Directory));
        assert!(rules.is_included("dump.vcd", EntryKind::Directory));
        assert!(rules.is_included("logs.log", EntryKind::Directory));
    }

    #[test]
    fn test_excluded_file_names() {
        let rules = ExclusionRules::builtin();
        assert!(rules.is_excluded("simv", EntryKind::File));
        assert!(rules.is_excluded("novas.rc", EntryKind::File));
        assert!(rules.is_excluded(".DS_Store", EntryKind::File));
        assert!(!rules.is_excluded("simv.sh", EntryKind::File));
    }

    #[test]
    fn test_excluded_extensions_suffix_match() {
        let rules = ExclusionRules::builtin();
        assert!(rules.is_excluded("wave.fsdb", EntryKind::File));
        assert!(rules.is_excluded("dump.vcd", EntryKind::File));
        assert!(rules.is_excluded("run.log", EntryKind::File));
        assert!(rules.is_excluded("ucli.key", EntryKind::File));
        // Suffix match, not extension parsing
        assert!(rules.is_excluded(".log", EntryKind::File));
        assert!(rules.is_excluded("x.tar.vcd", EntryKind::File));
        assert!(!rules.is_excluded("run.log.gz", EntryKind::File));
        assert!(!rules.is_excluded("catalog", EntryKind::File));
    }

    #[test]
    fn test_extensions_are_case_sensitive() {
        let rules = ExclusionRules::builtin();
        assert!(rules.is_included("RUN.LOG", EntryKind::File));
        assert!(rules.is_included("dump.VCD", EntryKind::File));
    }

    #[test]
    fn test_empty_rules_keep_everything() {
        let rules = ExclusionRules::empty();
        assert!(rules.is_included("work", EntryKind::Directory));
        assert!(rules.is_included("simv", EntryKind::File));
        assert!(rules.is_included("dump.vcd", EntryKind::File));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ExclusionRules::new(&["target"], &["Cargo.lock"], &[".o"]);
        assert!(rules.is_excluded("target", EntryKind::Directory));
        assert!(rules.is_excluded("Cargo.lock", EntryKind::File));
        assert!(rules.is_excluded("main.o", EntryKind::File));
        assert!(rules.is_included("work", EntryKind::Directory));
    }
}
