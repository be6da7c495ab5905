//! UniversalPath - normalized evidence path with a stable hash ID

use std::path::{Component, Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// A path wrapper used as the identity of an evidence file
///
/// Evidence paths often point inside a disk image and do not exist on the
/// examiner's machine, so normalization is purely lexical: `.` components are
/// dropped and `..` pops the previous component. A leading `..` of a
/// relative path is kept. The file system is never
/// touched.
#[derive(Debug, Clone)]
pub struct UniversalPath {
    /// Normalized path
    raw: PathBuf,

    /// UTF-8 display string (lossy conversion for UI)
    display: String,

    /// Hash-based ID of the display string
    id: u64,
}

impl UniversalPath {
    /// Create a new UniversalPath from any path-like type
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let raw = Self::normalize_path(path.as_ref());
        let display = raw.to_string_lossy().to_string();
        let id = xxh3_64(display.as_bytes());

        Self { raw, display, id }
    }

    /// Get the normalized path
    pub fn as_path(&self) -> &Path {
        &self.raw
    }

    /// Get the display string for UI
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Get the hash ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get file name
    pub fn file_name(&self) -> Option<&str> {
        self.raw.file_name()?.to_str()
    }

    fn normalize_path(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    // Nothing above the root
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    // Relative path climbing past its start
                    _ => normalized.push(".."),
                },
                Component::CurDir => {}
                _ => normalized.push(component),
            }
        }
        normalized
    }
}

impl PartialEq for UniversalPath {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for UniversalPath {}

impl AsRef<Path> for UniversalPath {
    fn as_ref(&self) -> &Path {
        &self.raw
    }
}

impl From<PathBuf> for UniversalPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for UniversalPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<String> for UniversalPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&str> for UniversalPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl std::fmt::Display for UniversalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}
