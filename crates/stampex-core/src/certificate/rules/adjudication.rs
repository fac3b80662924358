//! Adjudication number extraction.

use super::patterns::ADJUDICATION_NO;

/// Extract the adjudication number from certificate text.
///
/// Searches the whole text, not individual lines, so a label split from
/// its value by a line break still matches.
pub fn extract_adjudication_no(text: &str) -> Option<String> {
    ADJUDICATION_NO
        .captures(text)
        .map(|caps| caps[1].trim().replace('\n', " "))
}
