//! Structural detector patterns
//!
//! Compiled once; the application order lives in the redactor, not here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    pub static ref PHONE: Regex =
        Regex::new(r"(?:(?:\+?\d{1,3}[\s.-]?)?(?:\(?\d{3}\)?|\d{3})[\s.-]?\d{3}[\s.-]?\d{4})")
            .unwrap();
    pub static ref SSN: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    pub static ref CREDIT_CARD: Regex = Regex::new(r"\b(?:\d[ -]*?){13,19}\b").unwrap();
    pub static ref IP: Regex = Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap();
    pub static ref URL: Regex = Regex::new(r"(?i)\bhttps?://[^\s)>\]]+").unwrap();

    /// ISO and slashed/dashed numeric dates
    pub static ref DATE_NUMERIC: Regex =
        Regex::new(r"\b(?:\d{4}-\d{2}-\d{2}|\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b").unwrap();
    /// Month-name dates ("Jan 5", "March 12, 2021")
    pub static ref DATE_MONTH: Regex = Regex::new(
        r"(?i)\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+\d{1,2}(?:,\s*\d{2,4})?\b"
    )
    .unwrap();
}

/// First-person pronoun rewrite rules, applied in order (contractions
/// before the bare pronoun). Context-free token substitution with no
/// grammatical agreement checking.
pub const PRONOUN_RULES: &[(&str, &str)] = &[
    (r"(?i)\bI['\u{2019}]m\b", "the subject is"),
    (r"(?i)\bI['\u{2019}]ve\b", "the subject has"),
    (r"(?i)\bI['\u{2019}]d\b", "the subject would"),
    (r"(?i)\bI\b", "the subject"),
    (r"(?i)\bmy\b", "the subject's"),
    (r"(?i)\bmine\b", "the subject's"),
];
