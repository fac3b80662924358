//! Party name extraction from section headers.

use regex::Regex;

use super::patterns::{FIRST_PARTY_HEADER, SECOND_PARTY_HEADER};

/// Extract the first party name (Maklumat Pihak Pertama).
pub fn extract_first_party(text: &str) -> Option<String> {
    line_after_header(text, &FIRST_PARTY_HEADER)
}

/// Extract the second party name (Maklumat Pihak Kedua).
pub fn extract_second_party(text: &str) -> Option<String> {
    line_after_header(text, &SECOND_PARTY_HEADER)
}

/// The trimmed line following the first header line that has one.
///
/// A header on the final line has no value to read; a blank following
/// line counts as absent too.
fn line_after_header(text: &str, header: &Regex) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if header.is_match(line) {
            if let Some(next) = lines.get(i + 1) {
                let value = next.trim();
                if value.is_empty() {
                    return None;
                }
                return Some(value.to_string());
            }
        }
    }
    None
}
