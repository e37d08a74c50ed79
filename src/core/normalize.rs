//! Whitespace normalizer
//!
//! Two phases, applied in this order:
//! 1. drop tabs, then collapse every whitespace run (newlines included) to one space
//! 2. split on newlines, trim each line, rejoin with `\n`
//!
//! Phase 1 leaves no newlines behind, so phase 2 only ever sees one line.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Whitespace runs collapsed by the normalizer (`\v` is not part of the set)
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("Invalid WHITESPACE_RUN regex"));

/// Normalize whitespace in raw file content
pub fn normalize_whitespace(content: &[u8]) -> Vec<u8> {
    let without_tabs: Vec<u8> = content.iter().copied().filter(|&b| b != b'\t').collect();
    let collapsed = WHITESPACE_RUN.replace_all(&without_tabs, &b" "[..]);

    let lines: Vec<&[u8]> = collapsed.split(|&b| b == b'\n').map(trim_line).collect();
    lines.join(&b'\n')
}

/// Trim Unicode whitespace from both ends of a line. Invalid UTF-8 bytes
/// are never whitespace, so trimming stops at the first one from either side.
fn trim_line(line: &[u8]) -> &[u8] {
    if let Ok(s) = std::str::from_utf8(line) {
        return s.trim().as_bytes();
    }

    let lead = line
        .utf8_chunks()
        .next()
        .map(|chunk| chunk.valid().len() - chunk.valid().trim_start().len())
        .unwrap_or(0);
    let tail = match line.utf8_chunks().last() {
        Some(chunk) if chunk.invalid().is_empty() => {
            chunk.valid().len() - chunk.valid().trim_end().len()
        }
        _ => 0,
    };

    &line[lead..line.len() - tail]
}
