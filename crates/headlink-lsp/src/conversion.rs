//! URI/path conversion helpers between LSP documents and the core's
//! slash-delimited vault paths.

use std::path::Path;
use url::Url;

/// Vault-relative, slash-delimited path for `path`, extension included.
/// Falls back to the absolute path when `path` lies outside `root`.
pub fn vault_relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Extensionless basename of a file path, matching what the host editor
/// reports for its focused document.
pub fn doc_basename(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn uri_to_path(uri: &Url) -> Option<std::path::PathBuf> {
    uri.to_file_path().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_vault_relative_path() {
        let root = PathBuf::from("/vault");
        assert_eq!(
            vault_relative_path(&root, &PathBuf::from("/vault/folder/note.md")),
            "folder/note.md"
        );
        assert_eq!(
            vault_relative_path(&root, &PathBuf::from("/vault/note.md")),
            "note.md"
        );
    }

    #[test]
    fn test_doc_basename_strips_extension() {
        assert_eq!(doc_basename(&PathBuf::from("/vault/folder/note.md")), "note");
        assert_eq!(doc_basename(&PathBuf::from("plain")), "plain");
    }
}
