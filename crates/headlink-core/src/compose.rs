use crate::error::LinkError;
use crate::model::{ActiveDocument, PathParts};
use crate::resolve::nearest_heading;
use crate::template::{render, LinkValues};

/// Strip a trailing `.md` extension, if present.
fn strip_md_extension(path: &str) -> &str {
    path.strip_suffix(".md").unwrap_or(path)
}

fn wrap_link(rendered: String) -> String {
    format!("[[{}]]", rendered)
}

/// Copy flow: build a link to the nearest heading above the cursor of the
/// active document.
///
/// The document's path is used as-is for the directory portion and its
/// basename field (already extensionless, as supplied by the host) for the
/// basename portion. The returned string is wrapped in `[[...]]`.
pub fn compose_from_cursor(doc: &ActiveDocument, template: &str) -> Result<String, LinkError> {
    let heading = nearest_heading(&doc.text, doc.cursor_line).ok_or(LinkError::NoHeadingFound)?;

    let path = doc
        .path
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or(LinkError::NoAssociatedFile)?;

    let rendered = render(
        template,
        &LinkValues {
            file_dir: &PathParts::dir_of(path),
            file_basename: &doc.basename,
            heading_text: &heading.text,
        },
    );
    Ok(wrap_link(rendered))
}

/// Search flow: build a link for a selected search result.
///
/// Both fields must be present or the flow fails with
/// [`LinkError::IncompleteMatchResult`] and takes no action. The basename
/// is derived from the extension-stripped path, while the directory is
/// derived from the original untouched path; see DESIGN.md for why that
/// asymmetry is kept.
pub fn compose_from_match(
    path: Option<&str>,
    heading_text: Option<&str>,
    template: &str,
) -> Result<String, LinkError> {
    let (path, heading_text) = match (path, heading_text) {
        (Some(p), Some(h)) => (p, h),
        _ => return Err(LinkError::IncompleteMatchResult),
    };

    let stripped = strip_md_extension(path);
    let basename = PathParts::split(stripped).basename;
    let dir = PathParts::dir_of(path);

    let rendered = render(
        template,
        &LinkValues {
            file_dir: &dir,
            file_basename: &basename,
            heading_text,
        },
    );
    Ok(wrap_link(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::DEFAULT_LINK_FORMAT;

    fn active_doc() -> ActiveDocument {
        ActiveDocument {
            path: Some("folder/note.md".to_string()),
            basename: "note".to_string(),
            text: "# Intro\ntext\ncursor-here".to_string(),
            cursor_line: 2,
        }
    }

    #[test]
    fn test_copy_flow_default_template() {
        let link = compose_from_cursor(&active_doc(), DEFAULT_LINK_FORMAT).unwrap();
        assert_eq!(link, "[[folder/note#Intro|Intro]]");
    }

    #[test]
    fn test_copy_flow_no_heading() {
        let doc = ActiveDocument {
            text: "no headings at all".to_string(),
            cursor_line: 0,
            ..active_doc()
        };
        assert_eq!(
            compose_from_cursor(&doc, DEFAULT_LINK_FORMAT),
            Err(LinkError::NoHeadingFound)
        );
    }

    #[test]
    fn test_copy_flow_no_associated_file() {
        let doc = ActiveDocument {
            path: None,
            ..active_doc()
        };
        assert_eq!(
            compose_from_cursor(&doc, DEFAULT_LINK_FORMAT),
            Err(LinkError::NoAssociatedFile)
        );

        let doc = ActiveDocument {
            path: Some(String::new()),
            ..active_doc()
        };
        assert_eq!(
            compose_from_cursor(&doc, DEFAULT_LINK_FORMAT),
            Err(LinkError::NoAssociatedFile)
        );
    }

    #[test]
    fn test_copy_flow_rootless_document() {
        let doc = ActiveDocument {
            path: Some("note.md".to_string()),
            ..active_doc()
        };
        let link = compose_from_cursor(&doc, DEFAULT_LINK_FORMAT).unwrap();
        assert_eq!(link, "[[/note#Intro|Intro]]");
    }

    #[test]
    fn test_search_flow_default_template() {
        let link = compose_from_match(
            Some("x/y.md"),
            Some("Setup Steps"),
            "${fileDir}/${fileBasename}#${headingText}|${headingText}",
        )
        .unwrap();
        assert_eq!(link, "[[x/y#Setup Steps|Setup Steps]]");
    }

    #[test]
    fn test_search_flow_missing_fields() {
        let err = compose_from_match(None, Some("H"), DEFAULT_LINK_FORMAT);
        assert_eq!(err, Err(LinkError::IncompleteMatchResult));

        let err = compose_from_match(Some("x/y.md"), None, DEFAULT_LINK_FORMAT);
        assert_eq!(err, Err(LinkError::IncompleteMatchResult));
    }

    #[test]
    fn test_search_flow_extension_only_segment() {
        // The dir comes from the original path, the basename from the
        // stripped one; a final ".md" segment strips down to nothing.
        let link = compose_from_match(
            Some("notes/.md"),
            Some("H"),
            "${fileDir}|${fileBasename}",
        )
        .unwrap();
        assert_eq!(link, "[[notes|]]");
    }

    #[test]
    fn test_search_flow_path_without_extension() {
        let link = compose_from_match(
            Some("x/plain"),
            Some("H"),
            "${fileDir}/${fileBasename}",
        )
        .unwrap();
        assert_eq!(link, "[[x/plain]]");
    }
}
