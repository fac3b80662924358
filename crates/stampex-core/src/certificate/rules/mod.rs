//! Rule-based field recognizers for stamp certificates.
//!
//! Each recognizer is a pure function from document text to an optional
//! value; absence is the only failure signal.

pub mod adjudication;
pub mod consideration;
pub mod instrument;
pub mod parties;
pub mod patterns;
pub mod payment;

pub use adjudication::extract_adjudication_no;
pub use consideration::extract_consideration;
pub use instrument::{extract_instrument_date, extract_instrument_type};
pub use parties::{extract_first_party, extract_second_party};
pub use payment::extract_payment_method;
