//! Consideration amount extraction.

use super::patterns::CONSIDERATION;

/// Extract the consideration amount in RM.
///
/// The bilingual label pair and the currency marker must appear in
/// Balasan, Consideration, RM order, separated by arbitrary whitespace
/// (line breaks included). The numeric token is returned verbatim,
/// thousands separators and all.
pub fn extract_consideration(text: &str) -> Option<String> {
    CONSIDERATION
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(
            extract_consideration("Balasan Consideration RM 15,000.00"),
            Some("15,000.00".to_string())
        );
    }

    #[test]
    fn test_labels_split_across_lines() {
        assert_eq!(
            extract_consideration("Balasan\nConsideration\nRM 250.00"),
            Some("250.00".to_string())
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            extract_consideration("BALASAN CONSIDERATION RM 1,000"),
            Some("1,000".to_string())
        );
    }

    #[test]
    fn test_requires_full_label_sequence() {
        assert_eq!(extract_consideration("Consideration RM 500.00"), None);
        assert_eq!(extract_consideration("Balasan RM 500.00"), None);
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_consideration("no amounts here"), None);
    }
}
