//! Filesystem access used by the extraction pipeline.
//!
//! The pipeline only ever lists directories, checks for existence and reads
//! text, so the seam is a small synchronous trait. [`NativeFs`] talks to the
//! host filesystem; [`MemoryFs`] serves virtual files from memory.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use walkdir::WalkDir;

/// Read-only filesystem operations needed by the aggregator.
pub trait SourceFs: Debug {
    /// `Ok(false)` when the path is missing, `Err` when its entry cannot be inspected.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Recursively list every file under `root` in a stable order.
    ///
    /// Entries that cannot be read are reported in place instead of aborting
    /// the listing.
    fn walk_files(&self, root: &Path) -> Vec<io::Result<PathBuf>>;
}

/// [`SourceFs`] backed by `std::fs` and `walkdir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFs;

impl SourceFs for NativeFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn walk_files(&self, root: &Path) -> Vec<io::Result<PathBuf>> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(error) => Some(Err(io::Error::from(error))),
            })
            .collect()
    }
}

/// In-memory [`SourceFs`] holding virtual files.
///
/// Directories exist implicitly as prefixes of stored file paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, String>,
    faulty: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a virtual file.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files.insert(normalize(path.as_ref()), content.into());
    }

    /// Builder-style variant of [`MemoryFs::add_file`].
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Make every existence check on `path` fail with a permission error.
    pub fn fail_inspection(&mut self, path: impl AsRef<Path>) {
        self.faulty.insert(normalize(path.as_ref()));
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }
}

impl SourceFs for MemoryFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let path = normalize(path);
        if self.faulty.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot inspect {}", path.display()),
            ));
        }
        Ok(self.files.contains_key(&path) || self.is_dir(&path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = normalize(path);
        self.files.get(&path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no virtual file at {}", path.display()),
            )
        })
    }

    fn walk_files(&self, root: &Path) -> Vec<io::Result<PathBuf>> {
        let root = normalize(root);
        self.files
            .keys()
            .filter(|file| file.starts_with(&root))
            .cloned()
            .map(Ok)
            .collect()
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.to_path_buf().clean()
}
