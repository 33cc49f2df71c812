//! Root path resolution for the CLI.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Make `path` absolute against `cwd` and fold `.` and `..` components
/// lexically. Symlinks are left as they are.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    normalize(&joined)
}

/// Lexical normalization: drop `.`, let `..` pop the previous component, and
/// never climb above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Resolve the root argument against the current directory and check that
/// it exists.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
    let root = absolutize(path, &cwd);
    if !root.exists() {
        return Err(Error::RootNotFound { path: root });
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_kept() {
        let cwd = Path::new("/home/user");
        assert_eq!(absolutize(Path::new("/opt/proj"), cwd), PathBuf::from("/opt/proj"));
    }

    #[test]
    fn test_relative_path_joined() {
        let cwd = Path::new("/home/user");
        assert_eq!(absolutize(Path::new("proj/rtl"), cwd), PathBuf::from("/home/user/proj/rtl"));
        assert_eq!(absolutize(Path::new("."), cwd), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_dot_components_folded() {
        let cwd = Path::new("/home/user");
        assert_eq!(absolutize(Path::new("../other/./x"), cwd), PathBuf::from("/home/other/x"));
        assert_eq!(absolutize(Path::new("a/b/../../c/"), cwd), PathBuf::from("/home/user/c"));
    }

    #[test]
    fn test_cannot_climb_above_root() {
        assert_eq!(normalize(Path::new("/../../etc")), PathBuf::from("/etc"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_missing_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        match resolve_root(&missing) {
            Err(Error::RootNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected RootNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_existing_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = resolve_root(dir.path()).unwrap();
        assert_eq!(root, dir.path());
    }
}
