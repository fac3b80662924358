//! Payment method (Cara Bayaran) extraction.

use super::patterns::PAYMENT_LABEL;

/// Extract the payment method from certificate text.
///
/// Scans lines in order; the first line carrying the Malay or English
/// label decides the outcome. The value is whatever follows the last
/// label occurrence on that line. An empty remainder yields `None`
/// without consulting later lines.
pub fn extract_payment_method(text: &str) -> Option<String> {
    for line in text.lines() {
        if let Some(m) = PAYMENT_LABEL.find_iter(line).last() {
            let value = line[m.end()..].trim();
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
    }
    None
}
