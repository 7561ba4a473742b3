use crate::heading::extract_headings_up_to;
use crate::model::Heading;

/// Find the closest heading at or above `cursor_line`.
///
/// Equivalent to scanning from `cursor_line` down to line 0, inclusive;
/// the heading nearest the cursor wins. `None` is a normal outcome, not a
/// fault. A cursor past the end of the document clamps to the last line.
pub fn nearest_heading(text: &str, cursor_line: usize) -> Option<Heading> {
    extract_headings_up_to(text, cursor_line).pop()
}
