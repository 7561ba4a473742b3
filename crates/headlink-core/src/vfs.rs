use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::host::DocumentSource;
use crate::model::{ActiveDocument, DocumentContent};

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// List all files with the given extension under the root directory.
    /// This should be a recursive search.
    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        files.push(path.to_path_buf());
                    }
                }
            }
        }

        files
    }
}

/// A [`DocumentSource`] over the Markdown files of a vault directory.
///
/// Paths are reported relative to the root, slash-delimited, extension
/// included. Enumeration order is the sorted walk order, so search
/// results are stable across invocations. A vault has no notion of a
/// focused document; `active_document` is always `None`.
pub struct VaultSource<F: FileSystem> {
    root: PathBuf,
    fs: F,
}

impl<F: FileSystem> VaultSource<F> {
    pub fn new(root: PathBuf, fs: F) -> Self {
        Self { root, fs }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl<F: FileSystem> DocumentSource for VaultSource<F> {
    fn active_document(&self) -> Option<ActiveDocument> {
        None
    }

    fn list_documents(&self) -> Vec<DocumentContent> {
        self.fs
            .list_files(&self.root, "md")
            .into_iter()
            .filter_map(|path| {
                let content = self.fs.read_to_string(&path).ok()?;
                Some(DocumentContent {
                    path: self.relative_path(&path),
                    content,
                })
            })
            .collect()
    }
}
