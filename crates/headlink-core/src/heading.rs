use crate::model::Heading;

/// Parse a single line as a heading.
///
/// Detection is deliberately loose: after trimming whitespace the line
/// must start with one or more `#` characters. No space is required after
/// the marker run, and no level cap is enforced.
pub fn parse_heading_line(line: &str) -> Option<(u8, String)> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    let text = trimmed[level..].trim().to_string();
    Some((level as u8, text))
}

/// Extract all headings from `text`, in document order, each carrying its
/// zero-based line index.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    collect_headings(text.lines())
}

/// As [`extract_headings`], restricted to lines up to and including
/// `last_line`.
pub fn extract_headings_up_to(text: &str, last_line: usize) -> Vec<Heading> {
    collect_headings(text.lines().take(last_line.saturating_add(1)))
}

fn collect_headings<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Heading> {
    lines
        .enumerate()
        .filter_map(|(line, raw)| {
            parse_heading_line(raw).map(|(level, text)| Heading { level, text, line })
        })
        .collect()
}
