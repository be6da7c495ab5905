//! Selected file model

use crate::{FsError, Result, UniversalPath};
use std::path::Path;

/// Allocation state of a file's name entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFlag {
    /// Name entry is in use
    #[default]
    Allocated,
    /// Name entry is unallocated (deleted file)
    Unallocated,
}

/// Stable identity of a file
///
/// Two selections refer to the same file when both the normalized path and
/// the object id (inode or metadata address) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub path_hash: u64,
    pub object_id: u64,
}

/// A file as seen by the media viewer
#[derive(Debug, Clone)]
pub struct MediaFile {
    path: UniversalPath,
    name: String,
    size: u64,
    object_id: u64,
    name_flag: NameFlag,
}

impl MediaFile {
    /// Create an allocated file with object id 0
    pub fn new(path: impl Into<UniversalPath>, size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());

        Self {
            path,
            name,
            size,
            object_id: 0,
            name_flag: NameFlag::Allocated,
        }
    }

    pub fn with_object_id(mut self, object_id: u64) -> Self {
        self.object_id = object_id;
        self
    }

    pub fn with_name_flag(mut self, flag: NameFlag) -> Self {
        self.name_flag = flag;
        self
    }

    /// Build a file from a path on the local file system
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.display().to_string()),
            _ => FsError::Io(e),
        })?;

        if metadata.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "{} is a directory",
                path.display()
            )));
        }

        #[cfg(unix)]
        let object_id = {
            use std::os::unix::fs::MetadataExt;
            metadata.ino()
        };
        #[cfg(not(unix))]
        let object_id = 0;

        tracing::trace!(path = %path.display(), size = metadata.len(), "Stat media file");
        Ok(Self::new(path, metadata.len()).with_object_id(object_id))
    }

    pub fn path(&self) -> &UniversalPath {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn name_flag(&self) -> NameFlag {
        self.name_flag
    }

    /// Is the file's name entry unallocated (deleted)?
    pub fn is_unallocated(&self) -> bool {
        self.name_flag == NameFlag::Unallocated
    }

    pub fn id(&self) -> FileId {
        FileId {
            path_hash: self.path.id(),
            object_id: self.object_id,
        }
    }
}

impl PartialEq for MediaFile {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for MediaFile {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        let file = MediaFile::new("/img/vol2/DCIM/IMG_0001.JPG", 2048);
        assert_eq!(file.name(), "IMG_0001.JPG");
        assert_eq!(file.size(), 2048);
        assert!(!file.is_unallocated());
    }

    #[test]
    fn test_value_identity() {
        let a = MediaFile::new("/img/vol2/clip.mp4", 10).with_object_id(77);
        let b = MediaFile::new("/img/vol2/clip.mp4", 10).with_object_id(77);
        let other_inode = MediaFile::new("/img/vol2/clip.mp4", 10).with_object_id(78);

        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_ne!(a, other_inode);
    }

    #[test]
    fn test_relative_parent_is_distinct_file() {
        let up = MediaFile::new("../a.jpg", 10);
        let here = MediaFile::new("a.jpg", 10);
        assert_ne!(up.id(), here.id());
        assert_ne!(up, here);
    }

    #[test]
    fn test_unallocated_flag() {
        let file = MediaFile::new("/img/vol2/clip.mp4", 10).with_name_flag(NameFlag::Unallocated);
        assert!(file.is_unallocated());
        assert_eq!(file.name_flag(), NameFlag::Unallocated);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let file = MediaFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "song.mp3");
        assert_eq!(file.size(), 16);
        assert_eq!(file, MediaFile::from_path(&path).unwrap());
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MediaFile::from_path(&dir.path().join("missing.jpg")),
            Err(FsError::NotFound(_))
        ));
        assert!(matches!(
            MediaFile::from_path(dir.path()),
            Err(FsError::InvalidPath(_))
        ));
    }
}
