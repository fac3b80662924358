//! Common regex patterns for stamp certificate extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Payment method label, bilingual, separator included
    pub static ref PAYMENT_LABEL: Regex = Regex::new(
        r"(?i)(?:Cara\s*Bayaran|Payment\s*Method)[\s:]*"
    ).unwrap();

    // Adjudication number: label with optional period, then one token
    pub static ref ADJUDICATION_NO: Regex = Regex::new(
        r"(?i)Adjudication\s*No\.?\s*([A-Z0-9]+)"
    ).unwrap();

    // Instrument type labels, per language
    pub static ref INSTRUMENT_TYPE_MS: Regex = Regex::new(
        r"(?i)Jenis\s+Surat\s+Cara"
    ).unwrap();

    pub static ref INSTRUMENT_TYPE_EN: Regex = Regex::new(
        r"(?i)Type\s+Of\s+Instrument"
    ).unwrap();

    // Same labels with a leading .* so a replace strips everything
    // through the last label occurrence on the line
    pub static ref INSTRUMENT_TYPE_MS_PREFIX: Regex = Regex::new(
        r"(?i).*Jenis\s+Surat\s+Cara\s*"
    ).unwrap();

    pub static ref INSTRUMENT_TYPE_EN_PREFIX: Regex = Regex::new(
        r"(?i).*Type\s+Of\s+Instrument\s*"
    ).unwrap();

    // Instrument date: digits and slashes only
    pub static ref INSTRUMENT_DATE: Regex = Regex::new(
        r"(?i)Tarikh\s+Surat\s+Cara\s*([0-9/]+)"
    ).unwrap();

    // Consideration amount: Malay label, English label, currency, number
    pub static ref CONSIDERATION: Regex = Regex::new(
        r"(?i)Balasan\s*Consideration\s*RM\s*([\d.,]+)"
    ).unwrap();

    // Party section headers
    pub static ref FIRST_PARTY_HEADER: Regex = Regex::new(
        r"(?i)Maklumat\s+Pihak\s+Pertama"
    ).unwrap();

    pub static ref SECOND_PARTY_HEADER: Regex = Regex::new(
        r"(?i)Maklumat\s+Pihak\s+Kedua"
    ).unwrap();
}
