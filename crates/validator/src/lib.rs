// Dry-run checks of a manifest against an output root.
// Nothing here writes to disk.

use florastack_core::config::CONFIG_FILE_NAME;
use florastack_core::path::{display_relative, ensure_contained, resolve_relative};
use florastack_core::Manifest;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directories under the root that belong to tooling, not to the manifest
const IGNORED_DIRS: &[&str] = &["node_modules", ".next", ".git"];

/// What materializing an entry would do to the file at its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Overwrite,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub path: String,
    pub action: FileAction,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
    /// One entry per distinct path, in first-seen order
    pub plan: Vec<PlannedWrite>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn count(&self, action: FileAction) -> usize {
        self.plan.iter().filter(|p| p.action == action).count()
    }
}

/// Check `manifest` against `root` without writing anything.
///
/// Errors: unsafe paths, and paths blocked by an existing directory or by a
/// file where a directory is needed. Warnings: repeated paths. Info: totals,
/// the create/overwrite/unchanged split, and files under `root` that the
/// manifest does not mention.
pub fn validate_manifest(root: &Path, manifest: &Manifest) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Last entry wins, so the final content per path decides the action
    let mut final_content: BTreeMap<PathBuf, &str> = BTreeMap::new();
    let mut order: Vec<PathBuf> = Vec::new();
    let mut occurrences: BTreeMap<PathBuf, usize> = BTreeMap::new();

    for entry in manifest {
        match resolve_relative(entry.relative_path()) {
            Ok(relative) => {
                if !final_content.contains_key(&relative) {
                    order.push(relative.clone());
                }
                *occurrences.entry(relative.clone()).or_default() += 1;
                final_content.insert(relative, entry.content());
            }
            Err(e) => report.errors.push(e.to_string()),
        }
    }

    for (relative, count) in &occurrences {
        if *count > 1 {
            report.warnings.push(format!(
                "'{}' appears {} times; the last entry wins",
                display_relative(relative),
                count
            ));
        }
    }

    // Absent roots hold no symlinks, so only an existing root is checked
    let canonical_root = root.canonicalize().ok();
    for relative in &order {
        let content = final_content[relative];
        match plan_action(root, canonical_root.as_deref(), relative, content) {
            Ok(action) => report.plan.push(PlannedWrite {
                path: display_relative(relative),
                action,
            }),
            Err(msg) => report.errors.push(msg),
        }
    }

    let total_bytes: usize = manifest.iter().map(|e| e.content().len()).sum();
    report.info.push(format!(
        "{} entries, {} distinct files, {} bytes",
        manifest.len(),
        order.len(),
        total_bytes
    ));
    report.info.push(format!(
        "{} to create, {} to overwrite, {} unchanged",
        report.count(FileAction::Create),
        report.count(FileAction::Overwrite),
        report.count(FileAction::Unchanged)
    ));

    let known: BTreeSet<&PathBuf> = final_content.keys().collect();
    for extra in unmanaged_files(root, &known) {
        report
            .info
            .push(format!("'{}' is not part of the manifest", extra));
    }

    for warning in &report.warnings {
        warn!("{}", warning);
    }

    report
}

fn plan_action(
    root: &Path,
    canonical_root: Option<&Path>,
    relative: &Path,
    content: &str,
) -> Result<FileAction, String> {
    let display = display_relative(relative);

    if let Some(canonical) = canonical_root {
        ensure_contained(canonical, &canonical.join(relative), &display)
            .map_err(|e| e.to_string())?;
    }

    // Every ancestor that exists must be a directory
    let mut ancestor = PathBuf::new();
    let components: Vec<_> = relative.components().collect();
    for component in &components[..components.len().saturating_sub(1)] {
        ancestor.push(component);
        let on_disk = root.join(&ancestor);
        if on_disk.exists() && !on_disk.is_dir() {
            return Err(format!(
                "'{}' needs directory '{}', but a file is in the way",
                display,
                display_relative(&ancestor)
            ));
        }
    }

    let target = root.join(relative);
    // The rename replaces a symlink rather than writing through it
    let is_symlink = fs::symlink_metadata(&target)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        return Ok(FileAction::Overwrite);
    }
    if target.is_dir() {
        return Err(format!("'{}' is an existing directory", display));
    }

    match fs::read(&target) {
        Ok(existing) if existing == content.as_bytes() => Ok(FileAction::Unchanged),
        Ok(_) => Ok(FileAction::Overwrite),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileAction::Create),
        Err(e) => Err(format!("'{}' cannot be read: {}", display, e)),
    }
}

/// Files under `root` that are neither in `known` nor tool-managed
fn unmanaged_files(root: &Path, known: &BTreeSet<&PathBuf>) -> Vec<String> {
    if !root.is_dir() {
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !IGNORED_DIRS.iter().any(|d| e.file_name() == *d))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .filter(|rel| rel.as_os_str() != CONFIG_FILE_NAME && !known.contains(rel))
        .map(|rel| display_relative(&rel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use florastack_core::ManifestEntry;
    use tempfile::TempDir;

    fn manifest(entries: &[(&str, &str)]) -> Manifest {
        entries
            .iter()
            .map(|(p, c)| ManifestEntry::new(*p, *c))
            .collect()
    }

    #[test]
    fn test_fresh_root_plans_creates() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");
        let report = validate_manifest(&root, &manifest(&[("a.txt", "a"), ("app/b.tsx", "b")]));

        assert!(report.is_ok());
        assert_eq!(report.count(FileAction::Create), 2);
        assert!(report.info.iter().any(|i| i == "2 entries, 2 distinct files, 2 bytes"));
        assert!(!root.exists(), "validation must not create the root");
    }

    #[test]
    fn test_existing_files_overwrite_or_unchanged() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("same.txt"), "same").unwrap();
        fs::write(dir.path().join("stale.txt"), "old").unwrap();

        let report = validate_manifest(
            dir.path(),
            &manifest(&[("same.txt", "same"), ("stale.txt", "new")]),
        );

        assert_eq!(
            report.plan,
            vec![
                PlannedWrite {
                    path: "same.txt".to_string(),
                    action: FileAction::Unchanged
                },
                PlannedWrite {
                    path: "stale.txt".to_string(),
                    action: FileAction::Overwrite
                },
            ]
        );
    }

    #[test]
    fn test_traversal_is_error() {
        let dir = TempDir::new().unwrap();
        let report = validate_manifest(
            dir.path(),
            &manifest(&[("ok.txt", ""), ("../../etc/passwd", "x")]),
        );
        assert!(!report.is_ok());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("../../etc/passwd"));
        assert_eq!(report.plan.len(), 1);
    }

    #[test]
    fn test_duplicates_warn_and_use_last_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dup.txt"), "second").unwrap();

        let report = validate_manifest(
            dir.path(),
            &manifest(&[("dup.txt", "first"), ("./dup.txt", "second")]),
        );

        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("appears 2 times"));
        assert_eq!(report.plan.len(), 1);
        assert_eq!(report.plan[0].action, FileAction::Unchanged);
    }

    #[test]
    fn test_directory_in_the_way_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("README.md")).unwrap();
        let report = validate_manifest(dir.path(), &manifest(&[("README.md", "# hi")]));
        assert!(report.errors[0].contains("is an existing directory"));
    }

    #[test]
    fn test_file_in_place_of_directory_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app"), "file").unwrap();
        let report = validate_manifest(dir.path(), &manifest(&[("app/page.tsx", "x")]));
        assert!(report.errors[0].contains("needs directory 'app'"));
    }

    #[test]
    fn test_unmanaged_files_listed_and_tooling_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/next")).unwrap();
        fs::write(dir.path().join("node_modules/next/index.js"), "").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        fs::write(dir.path().join("notes.md"), "mine").unwrap();

        let report = validate_manifest(dir.path(), &manifest(&[("README.md", "")]));

        let extras: Vec<&String> = report
            .info
            .iter()
            .filter(|i| i.contains("not part of the manifest"))
            .collect();
        assert_eq!(extras.len(), 1);
        assert!(extras[0].contains("notes.md"));
    }

    #[test]
    fn test_empty_manifest() {
        let dir = TempDir::new().unwrap();
        let report = validate_manifest(dir.path(), &Manifest::new());
        assert!(report.is_ok());
        assert!(report.plan.is_empty());
        assert!(report.info.iter().any(|i| i == "0 entries, 0 distinct files, 0 bytes"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_escape_is_error() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "same").unwrap();
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        let report = validate_manifest(
            dir.path(),
            &manifest(&[("ok.txt", "x"), ("link/secret.txt", "same")]),
        );

        assert!(!report.is_ok());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Path escapes output root: 'link/secret.txt'"));
        assert_eq!(
            report.plan,
            vec![PlannedWrite {
                path: "ok.txt".to_string(),
                action: FileAction::Create
            }]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_target_is_overwritten_not_read() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "same").unwrap();
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            dir.path().join("README.md"),
        )
        .unwrap();

        let report = validate_manifest(dir.path(), &manifest(&[("README.md", "same")]));

        assert!(report.is_ok());
        assert_eq!(report.plan[0].action, FileAction::Overwrite);
    }
}
