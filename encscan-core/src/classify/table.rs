//! Table-level encryption classification.
//!
//! Evaluates one table's catalog metadata in fixed priority order:
//! creation options, then table comment, then the full DDL statement.
//! The first matching source wins and becomes the retained evidence.

use super::{
    CREATE_OPTION_MARKERS, CREATE_STATEMENT_MARKERS, GENERIC_MARKER, contains_any,
    evidence_excerpt, extract_algorithm,
};
use crate::models::{
    EncryptionAlgorithm, EncryptionEvidence, EncryptionScope, EncryptionVerdict,
    TableMetadataBundle,
};

/// Classifies one table from its catalog metadata.
///
/// Returns `None` when no table-level marker is present; the caller then
/// falls through to column classification. Algorithm extraction runs on
/// whichever text matched, never on the other sources.
pub fn classify_table(bundle: &TableMetadataBundle) -> Option<EncryptionVerdict> {
    let options_lower = bundle.create_options.to_lowercase();
    if contains_any(&options_lower, &CREATE_OPTION_MARKERS) {
        return Some(table_level_verdict(
            extract_algorithm(&options_lower),
            EncryptionEvidence {
                create_options: Some(bundle.create_options.clone()),
                ..Default::default()
            },
        ));
    }

    let comment_lower = bundle.table_comment.to_lowercase();
    if comment_lower.contains(GENERIC_MARKER) {
        return Some(table_level_verdict(
            extract_algorithm(&comment_lower),
            EncryptionEvidence {
                table_comment: Some(bundle.table_comment.clone()),
                ..Default::default()
            },
        ));
    }

    let statement_lower = bundle.create_statement.to_lowercase();
    if contains_any(&statement_lower, &CREATE_STATEMENT_MARKERS) {
        return Some(table_level_verdict(
            extract_algorithm(&statement_lower),
            EncryptionEvidence {
                create_statement: Some(evidence_excerpt(&bundle.create_statement)),
                ..Default::default()
            },
        ));
    }

    None
}

fn table_level_verdict(
    algorithm: Option<EncryptionAlgorithm>,
    details: EncryptionEvidence,
) -> EncryptionVerdict {
    EncryptionVerdict {
        encrypted: true,
        encryption_type: Some(EncryptionScope::TableLevel),
        encryption_algorithm: algorithm,
        encrypted_columns: Vec::new(),
        details,
    }
}
