use crate::error::Result;
use serde::Serialize;

/// One file the generator wants on disk.
///
/// Fields are private so an entry cannot change after it joins a manifest.
/// The path is checked when the entry is materialized, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    relative_path: String,
    content: String,
}

impl ManifestEntry {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered list of files to write.
///
/// Order only affects reporting. Duplicate paths are allowed and the later
/// entry wins on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, relative_path: impl Into<String>, content: impl Into<String>) {
        self.entries.push(ManifestEntry::new(relative_path, content));
    }

    /// Add an entry whose content is `value` as pretty-printed JSON.
    pub fn push_json<T: Serialize + ?Sized>(
        &mut self,
        relative_path: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        self.push(relative_path, content);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestEntry> {
        self.entries.iter()
    }

    /// Look up the content that will end up on disk for `relative_path`
    /// (the last entry with that path).
    pub fn content_of(&self, relative_path: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.relative_path == relative_path)
            .map(ManifestEntry::content)
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Manifest {
    type Item = ManifestEntry;
    type IntoIter = std::vec::IntoIter<ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of writing one manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteResult {
    /// Normalized relative path, `/`-separated
    pub path: String,
    pub bytes_written: u64,
    /// True when no file existed at the path before this write
    pub created: bool,
}
