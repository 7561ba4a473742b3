use serde::{Deserialize, Serialize};

/// A Markdown section heading, derived from document content on demand.
///
/// `text` never contains leading `#` characters or surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Count of leading `#` characters
    pub level: u8,
    /// Heading text, markers stripped and trimmed
    pub text: String,
    /// Zero-based line index within the source document
    pub line: usize,
}

/// A slash-delimited path split at its last separator.
///
/// `dir` is the empty string when the path has no separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub dir: String,
    pub basename: String,
}

impl PathParts {
    /// Split `path` at its last `/`. No extension handling here; callers
    /// strip `.md` beforehand where their flow requires it.
    pub fn split(path: &str) -> Self {
        match path.rfind('/') {
            Some(idx) => Self {
                dir: path[..idx].to_string(),
                basename: path[idx + 1..].to_string(),
            },
            None => Self {
                dir: String::new(),
                basename: path.to_string(),
            },
        }
    }

    /// Directory portion only (substring up to the last separator).
    pub fn dir_of(path: &str) -> String {
        match path.rfind('/') {
            Some(idx) => path[..idx].to_string(),
            None => String::new(),
        }
    }
}

/// One heading found during a search, paired with its owning document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub path: String,
    pub heading_text: String,
}

/// A member of the searchable document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    /// Slash-delimited path, extension included
    pub path: String,
    pub content: String,
}

/// Snapshot of the host editor's focused document.
///
/// `path` is `None` for documents with no associated file (scratch
/// buffers); `basename` comes from the host already extensionless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub path: Option<String>,
    pub basename: String,
    pub text: String,
    /// Zero-based cursor line
    pub cursor_line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_separator() {
        let parts = PathParts::split("folder/sub/note");
        assert_eq!(parts.dir, "folder/sub");
        assert_eq!(parts.basename, "note");
    }

    #[test]
    fn test_split_without_separator() {
        let parts = PathParts::split("note");
        assert_eq!(parts.dir, "");
        assert_eq!(parts.basename, "note");
    }

    #[test]
    fn test_dir_of_keeps_original_suffix() {
        assert_eq!(PathParts::dir_of("x/y.md"), "x");
        assert_eq!(PathParts::dir_of("y.md"), "");
    }
}
