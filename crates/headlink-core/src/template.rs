//! Link-format template rendering.
//!
//! Single source of truth for the placeholder vocabulary. Templates are
//! plain strings; the three tokens below are replaced literally wherever
//! they occur. There is no escaping mechanism, so a literal occurrence of
//! a token in user text is always treated as a placeholder.

/// Placeholder for the document's directory portion.
pub const FILE_DIR: &str = "${fileDir}";
/// Placeholder for the document's extensionless basename.
pub const FILE_BASENAME: &str = "${fileBasename}";
/// Placeholder for the heading text.
pub const HEADING_TEXT: &str = "${headingText}";

/// Default link format, used when no stored setting overrides it.
pub const DEFAULT_LINK_FORMAT: &str = "${fileDir}/${fileBasename}#${headingText}|${headingText}";

/// Values substituted for the placeholder tokens.
#[derive(Debug, Clone, Default)]
pub struct LinkValues<'a> {
    pub file_dir: &'a str,
    pub file_basename: &'a str,
    pub heading_text: &'a str,
}

/// Render `template` by substituting each placeholder token with its value.
///
/// The template is scanned once, left to right; substituted values are
/// emitted verbatim and never rescanned, so a value that itself contains a
/// placeholder-shaped substring stays intact. Tokens may repeat, appear in
/// any order, or be absent. Cannot fail.
pub fn render(template: &str, values: &LinkValues<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(tail) = rest.strip_prefix(FILE_DIR) {
            out.push_str(values.file_dir);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(FILE_BASENAME) {
            out.push_str(values.file_basename);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix(HEADING_TEXT) {
            out.push_str(values.heading_text);
            rest = tail;
        } else {
            // A '$' that does not open a known token is literal.
            out.push('$');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    out
}
