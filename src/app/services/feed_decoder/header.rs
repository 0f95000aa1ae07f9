//! Header-row location and field-name extraction
//!
//! Both typ01 tabular feeds anchor their column names on a line starting
//! with the `# REG_ID` marker, preceded by a variable amount of preamble
//! and comment text. The marker text is shared between feeds, so a
//! minimum-token-count guard disambiguates the forecast feed's wider
//! header from the region feed's narrower one.

use crate::constants::HEADER_MARKER;

/// Locate the header row in a sequence of feed lines
///
/// Returns the index of the first line that begins with the literal
/// `# REG_ID` and splits into strictly more than `min_tokens`
/// whitespace-delimited tokens, or `None` when no line qualifies.
/// Absence of a header is not an error: the requested resource usually
/// produced a different report type, and the caller is better served by
/// "no rows" than a failure.
pub fn locate_header(lines: &[&str], min_tokens: usize) -> Option<usize> {
    lines.iter().position(|line| {
        line.starts_with(HEADER_MARKER) && line.split_whitespace().count() > min_tokens
    })
}

/// Extract the ordered field names from a header line
///
/// Strips the leading `#` marker (first occurrence only), trims, and
/// splits on runs of whitespace. Order is preserved; it defines the shape
/// of the records decoded from the data rows that follow.
pub fn header_fields(line: &str) -> Vec<String> {
    line.replacen('#', "", 1)
        .trim()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
