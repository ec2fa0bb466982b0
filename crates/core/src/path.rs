use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Validate a manifest path and normalize it to a relative `PathBuf`.
///
/// This is the lexical half of root containment. It rejects:
/// - Empty or whitespace-only paths
/// - Absolute paths (leading `/`, `\`, or a Windows drive prefix)
/// - Any parent directory reference (`..`)
/// - Paths that normalize to the root itself (`.`, `./`)
///
/// `.` segments are dropped, so `./app/page.tsx` and `app/page.tsx` resolve
/// to the same file.
///
/// # Examples
///
/// ```text
/// resolve_relative("app/page.tsx")       → Ok("app/page.tsx")
/// resolve_relative("./README.md")        → Ok("README.md")
/// resolve_relative("/etc/passwd")        → Err(PathEscape "absolute paths not allowed")
/// resolve_relative("../../etc/passwd")   → Err(PathEscape "parent directory references (..) not allowed")
/// ```
pub fn resolve_relative(path_str: &str) -> Result<PathBuf> {
    if path_str.trim().is_empty() {
        return Err(Error::path_escape(path_str, "empty path"));
    }

    let path = Path::new(path_str);
    if path.is_absolute() {
        return Err(Error::path_escape(path_str, "absolute paths not allowed"));
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(Error::path_escape(
                    path_str,
                    "parent directory references (..) not allowed",
                ));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::path_escape(path_str, "absolute paths not allowed"));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(Error::path_escape(path_str, "path names the root itself"));
    }

    Ok(normalized)
}

/// Render a relative path with `/` separators regardless of platform.
pub fn display_relative(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Reject targets whose nearest existing ancestor resolves outside `root`.
///
/// `root` must already be canonical. The lexical check cannot see symlinks
/// already present in the tree, so the on-disk ancestor is canonicalized and
/// compared to the root. `shown` is the path used in the error.
pub fn ensure_contained(root: &Path, target: &Path, shown: &str) -> Result<()> {
    let mut probe = target.parent();
    while let Some(dir) = probe {
        if dir.exists() {
            let canonical = dir.canonicalize().map_err(|e| Error::io(dir, e))?;
            if !canonical.starts_with(root) {
                return Err(Error::path_escape(
                    shown,
                    format!("resolves outside root via {}", canonical.display()),
                ));
            }
            return Ok(());
        }
        probe = dir.parent();
    }
    Ok(())
}
