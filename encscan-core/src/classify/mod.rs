//! Heuristic classification of tables against known encryption markers.
//!
//! The classifiers are pure functions over catalog text: no I/O, no shared
//! state. Matching is substring-based and case-insensitive by design: it
//! trades precision for recall (`encrypted=yesno` still matches) and the
//! match-priority order is part of the observable behavior:
//! creation options, then table comment, then DDL, then columns.
//!
//! # Module Structure
//! - `table`: table-level classification (creation options, comment, DDL)
//! - `column`: column-level classification over column definitions

mod column;
mod table;

pub use column::classify_columns;
pub use table::classify_table;

use crate::models::EncryptionAlgorithm;

/// Markers in `CREATE_OPTIONS` text that indicate table-level encryption.
const CREATE_OPTION_MARKERS: [&str; 4] = [
    "encryption='y'",
    "encryption=y",
    "encrypted=yes",
    "encryption_key_id",
];

/// Markers searched for in the full DDL statement.
const CREATE_STATEMENT_MARKERS: [&str; 3] = ["encryption='y'", "encrypted=yes", "encryption_key_id"];

/// Generic marker for table comments and column definitions.
const GENERIC_MARKER: &str = "encrypt";

/// Encryption-function call forms. The trailing paren distinguishes these
/// from the generic marker, though both checks may fire on the same text.
const FUNCTION_MARKERS: [&str; 4] = ["aes_encrypt", "aes_decrypt", "encrypt(", "decrypt("];

/// DDL excerpts retained as evidence are capped at this many characters.
const EVIDENCE_EXCERPT_CHARS: usize = 512;

/// Returns true when the (already lower-cased) text contains any marker.
fn contains_any(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text_lower.contains(marker))
}

/// Extracts the algorithm family from matched evidence text.
///
/// The most specific token wins: "3des" is reported as 3DES even though
/// "des" is a substring of it; "aes" is checked before the bare "des".
fn extract_algorithm(text_lower: &str) -> Option<EncryptionAlgorithm> {
    if text_lower.contains("3des") {
        Some(EncryptionAlgorithm::TripleDes)
    } else if text_lower.contains("aes") {
        Some(EncryptionAlgorithm::Aes)
    } else if text_lower.contains("des") {
        Some(EncryptionAlgorithm::Des)
    } else {
        None
    }
}

/// Truncates evidence text to a bounded, char-boundary-safe excerpt.
fn evidence_excerpt(text: &str) -> String {
    if text.chars().count() <= EVIDENCE_EXCERPT_CHARS {
        text.to_string()
    } else {
        text.chars().take(EVIDENCE_EXCERPT_CHARS).collect()
    }
}
