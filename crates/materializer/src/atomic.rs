use florastack_core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Replace `target` with `content` via a temp file in the same directory.
///
/// Readers see either the old bytes or the new bytes. On failure the temp
/// file is removed and `target` keeps its prior content. Permissions of an
/// existing regular file are carried over.
pub(crate) fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = target
        .parent()
        .ok_or_else(|| Error::path_escape(&target.to_string_lossy(), "no parent directory"))?;

    let previous = fs::symlink_metadata(target)
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.permissions());

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(content).map_err(|e| Error::io(target, e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(target, e))?;

    match previous {
        Some(perms) => fs::set_permissions(tmp.path(), perms),
        None => set_new_file_permissions(tmp.path()),
    }
    .map_err(|e| Error::io(target, e))?;

    tmp.persist(target).map_err(|e| Error::io(target, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_new_file_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
