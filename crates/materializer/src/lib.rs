//! Writes a `Manifest` to disk under a root directory.
//!
//! Every entry is checked for root containment before anything is written,
//! then entries are written one at a time in manifest order. The first
//! failure aborts the run; files already written stay on disk.

mod atomic;
mod report;

pub use report::{NoopReporter, Reporter};

use florastack_core::path::{display_relative, ensure_contained, resolve_relative};
use florastack_core::{Error, Manifest, Result, WriteResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Materialize `manifest` under `root`.
///
/// `root` is created (with ancestors) if absent. Results come back in
/// manifest order, one per entry, including repeated paths. `reporter` sees
/// each result right after its file is written.
///
/// # Errors
///
/// - `Error::PathEscape` if any entry is empty, absolute, contains `..`, or
///   would be written through a symlink leading outside `root`. Lexical
///   problems are caught before the first write.
/// - `Error::Io` for any filesystem failure, naming the path involved.
pub fn materialize(
    root: &Path,
    manifest: &Manifest,
    reporter: &mut dyn Reporter,
) -> Result<Vec<WriteResult>> {
    let resolved = manifest
        .iter()
        .map(|entry| resolve_relative(entry.relative_path()))
        .collect::<Result<Vec<PathBuf>>>()?;

    fs::create_dir_all(root).map_err(|e| Error::io(root, e))?;
    let root = root.canonicalize().map_err(|e| Error::io(root, e))?;
    debug!(root = %root.display(), entries = manifest.len(), "materializing manifest");

    let mut results = Vec::with_capacity(manifest.len());
    for (entry, relative) in manifest.iter().zip(&resolved) {
        let result = write_entry(&root, relative, entry.content())?;
        reporter.wrote(&result);
        results.push(result);
    }

    info!(
        root = %root.display(),
        files = results.len(),
        created = results.iter().filter(|r| r.created).count(),
        "materialization complete"
    );
    Ok(results)
}

fn write_entry(root: &Path, relative: &Path, content: &str) -> Result<WriteResult> {
    let shown = display_relative(relative);
    let target = root.join(relative);

    ensure_contained(root, &target, &shown)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let created = fs::symlink_metadata(&target).is_err();
    atomic::write_atomic(&target, content.as_bytes())?;
    debug!(path = %shown, bytes = content.len(), created, "wrote file");

    Ok(WriteResult {
        path: shown,
        bytes_written: content.len() as u64,
        created,
    })
}
