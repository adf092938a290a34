//! Read-only file trees that scheme files are loaded from.
//!
//! The scheme catalog never touches the filesystem directly. It asks a
//! [`FileTree`] for its file list and for file contents, so schemes can come
//! from a directory on disk ([`DirTree`]) or from memory ([`MemoryTree`], for
//! schemes compiled into a binary with `include_str!` and for tests).
//!
//! Paths are relative to the tree root and always use `/` as the separator.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A read-only, path-addressed collection of files.
pub trait FileTree {
    /// Every file in the tree, sorted, as `/`-separated relative paths.
    fn files(&self) -> Result<Vec<String>>;

    /// The contents of the file at `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// A directory on disk, walked recursively.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileTree for DirTree {
    fn files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        walk_dir_recursive(&self.root, &self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|e| Error::io(full, e))
    }
}

fn walk_dir_recursive(current: &Path, root: &Path, files: &mut Vec<String>) -> Result<()> {
    let entries = std::fs::read_dir(current).map_err(|e| Error::io(current, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(current, e))?;
        let path = entry.path();
        // Not followed through symlinks, so a link cycle cannot recurse forever.
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

        if file_type.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            log::debug!("skipping symlinked directory {}", path.display());
        } else if path.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                let name = relative
                    .to_string_lossy()
                    .replace(std::path::MAIN_SEPARATOR, "/");
                files.push(name);
            }
        }
    }

    Ok(())
}

/// An in-memory tree.
///
/// # Example
///
/// ```rust
/// use tintforge::{FileTree, MemoryTree};
///
/// let tree = MemoryTree::new()
///     .with_file("b.yaml", "scheme: B")
///     .with_file("a/c.yaml", "scheme: C");
///
/// assert_eq!(tree.files().unwrap(), vec!["a/c.yaml", "b.yaml"]);
/// assert_eq!(tree.read("b.yaml").unwrap(), b"scheme: B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from `(path, contents)` pairs, e.g. a table of
    /// `include_str!` entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |tree, (path, contents)| tree.with_file(path, contents))
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileTree for MemoryTree {
    fn files(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file in tree"),
            )
        })
    }
}
