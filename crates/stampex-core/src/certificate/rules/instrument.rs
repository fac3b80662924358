//! Instrument type and instrument date extraction.

use super::patterns::{
    INSTRUMENT_DATE, INSTRUMENT_TYPE_EN, INSTRUMENT_TYPE_EN_PREFIX, INSTRUMENT_TYPE_MS,
    INSTRUMENT_TYPE_MS_PREFIX,
};

/// Extract the instrument type, merging the Malay and English label values.
///
/// Each language keeps the value from its last matching line. A line
/// carrying both labels counts as Malay only. Both values present means
/// they are joined Malay-first with a single space.
pub fn extract_instrument_type(text: &str) -> Option<String> {
    let mut malay_value = String::new();
    let mut eng_value = String::new();

    for line in text.lines() {
        if INSTRUMENT_TYPE_MS.is_match(line) {
            malay_value = INSTRUMENT_TYPE_MS_PREFIX.replace(line, "").trim().to_string();
        } else if INSTRUMENT_TYPE_EN.is_match(line) {
            eng_value = INSTRUMENT_TYPE_EN_PREFIX.replace(line, "").trim().to_string();
        }
    }

    match (malay_value.is_empty(), eng_value.is_empty()) {
        (false, false) => Some(format!("{} {}", malay_value, eng_value)),
        (false, true) => Some(malay_value),
        (true, false) => Some(eng_value),
        (true, true) => None,
    }
}

/// Extract the instrument date as it appears in the text.
///
/// Whole-text search; the value is the digits-and-slashes token after the
/// label, returned verbatim without date validation.
pub fn extract_instrument_date(text: &str) -> Option<String> {
    INSTRUMENT_DATE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}
