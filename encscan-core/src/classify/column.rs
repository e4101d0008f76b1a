//! Column-level encryption classification.
//!
//! Each column is evaluated independently against the marker vocabulary;
//! a table is column-level encrypted when at least one column matches.
//! Column-level verdicts never populate the table-level algorithm field;
//! function-name detection is reported as a per-column flag instead.

use super::{FUNCTION_MARKERS, GENERIC_MARKER, contains_any};
use crate::models::{
    ColumnDescriptor, ColumnFinding, EncryptionEvidence, EncryptionScope, EncryptionVerdict,
};

/// Classifies a table's column list.
///
/// Returns `None` when no column matches. On a match, the verdict carries
/// the matched columns (in column order) and the full per-column
/// evaluation (matched and unmatched) as evidence.
pub fn classify_columns(columns: &[ColumnDescriptor]) -> Option<EncryptionVerdict> {
    let findings: Vec<ColumnFinding> = columns.iter().map(evaluate_column).collect();

    let matched: Vec<ColumnFinding> = findings
        .iter()
        .filter(|finding| finding.encrypted)
        .cloned()
        .collect();

    if matched.is_empty() {
        return None;
    }

    Some(EncryptionVerdict {
        encrypted: true,
        encryption_type: Some(EncryptionScope::ColumnLevel),
        encryption_algorithm: None,
        encrypted_columns: matched,
        details: EncryptionEvidence {
            encrypted_columns: Some(findings),
            ..Default::default()
        },
    })
}

/// Evaluates one column against the marker vocabulary.
///
/// A column is encrypted when any of its definition fields contains the
/// generic marker, or when its type/comment/extra text contains an
/// encryption-function name. Both checks may fire on the same text.
fn evaluate_column(column: &ColumnDescriptor) -> ColumnFinding {
    let data_type = column.data_type.to_lowercase();
    let column_type = column.column_type.to_lowercase();
    let comment = column.comment.to_lowercase();
    let extra = column.extra.to_lowercase();

    let generic_match = [&data_type, &column_type, &comment, &extra]
        .iter()
        .any(|text| text.contains(GENERIC_MARKER));

    let function_match = [&column_type, &comment, &extra]
        .iter()
        .any(|text| contains_any(text, &FUNCTION_MARKERS));

    ColumnFinding {
        column_name: column.name.clone(),
        data_type: column.data_type.clone(),
        column_type: column.column_type.clone(),
        comment: column.comment.clone(),
        extra: column.extra.clone(),
        encrypted: generic_match || function_match,
        function_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str, column_type: &str, comment: &str, extra: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            data_type: data_type.to_string(),
            column_type: column_type.to_string(),
            comment: comment.to_string(),
            extra: extra.to_string(),
        }
    }

    fn plain(name: &str) -> ColumnDescriptor {
        column(name, "varchar", "varchar(255)", "", "")
    }

    #[test]
    fn test_comment_marker_selects_single_column() {
        let columns = vec![
            column("id", "int", "int", "", ""),
            column("password", "varchar", "varchar(255)", "encrypted password field", ""),
        ];

        let verdict = classify_columns(&columns).unwrap();
        assert!(verdict.encrypted);
        assert_eq!(verdict.encryption_type, Some(EncryptionScope::ColumnLevel));
        assert_eq!(verdict.encrypted_columns.len(), 1);
        assert_eq!(verdict.encrypted_columns[0].column_name, "password");
        assert!(!verdict.encrypted_columns[0].function_match);
    }

    #[test]
    fn test_column_level_never_sets_algorithm() {
        let columns = vec![column(
            "secret",
            "blob",
            "blob",
            "stored via AES_ENCRYPT()",
            "",
        )];

        let verdict = classify_columns(&columns).unwrap();
        assert_eq!(verdict.encryption_algorithm, None);
        assert!(verdict.encrypted_columns[0].function_match);
    }

    #[test]
    fn test_function_markers_match() {
        for text in ["aes_encrypt(data, key)", "AES_DECRYPT wrapper", "decrypt(payload)"] {
            let columns = vec![column("c", "blob", "blob", text, "")];
            let verdict = classify_columns(&columns);
            assert!(verdict.is_some(), "comment {:?} should match", text);
        }
    }

    #[test]
    fn test_extra_attribute_marker() {
        let columns = vec![column("card_number", "varchar", "varchar(64)", "", "ENCRYPTED")];

        let verdict = classify_columns(&columns).unwrap();
        assert_eq!(verdict.encrypted_columns.len(), 1);
    }

    #[test]
    fn test_data_type_marker() {
        let columns = vec![column("token", "encrypted_text", "encrypted_text", "", "")];
        assert!(classify_columns(&columns).is_some());
    }

    #[test]
    fn test_no_match_returns_negative() {
        let columns = vec![plain("id"), plain("name"), plain("created_at")];
        assert!(classify_columns(&columns).is_none());
    }

    #[test]
    fn test_empty_column_list_returns_negative() {
        assert!(classify_columns(&[]).is_none());
    }

    #[test]
    fn test_matched_columns_keep_column_order() {
        let columns = vec![
            column("ssn", "varchar", "varchar(32)", "encrypted", ""),
            plain("name"),
            column("iban", "varchar", "varchar(64)", "uses aes_encrypt(", ""),
        ];

        let verdict = classify_columns(&columns).unwrap();
        let names: Vec<&str> = verdict
            .encrypted_columns
            .iter()
            .map(|f| f.column_name.as_str())
            .collect();
        assert_eq!(names, ["ssn", "iban"]);
    }

    #[test]
    fn test_evidence_records_unmatched_columns_too() {
        let columns = vec![plain("id"), column("pin", "varchar", "varchar(8)", "encrypted", "")];

        let verdict = classify_columns(&columns).unwrap();
        let evidence = verdict.details.encrypted_columns.unwrap();
        assert_eq!(evidence.len(), 2);
        assert!(!evidence[0].encrypted);
        assert!(evidence[1].encrypted);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let columns = vec![plain("id"), column("pin", "varchar", "varchar(8)", "encrypted", "")];
        assert_eq!(classify_columns(&columns), classify_columns(&columns));
    }
}
