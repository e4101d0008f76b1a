//! Core data models for encryption scan results.
//!
//! This module defines the structures exchanged between the catalog
//! accessor, the classification engine, and report sinks. All models are
//! serializable; none of them carry credentials or row data.

use serde::{Deserialize, Serialize};

/// Per-table catalog snapshot consumed by the table classifier.
///
/// All fields are plain strings: a field the catalog does not report is
/// represented as an empty string, never as a distinct "unknown" state.
/// The bundle is immutable once fetched and lives for one classification
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadataBundle {
    pub table_name: String,
    /// Raw `CREATE_OPTIONS` text from the catalog.
    pub create_options: String,
    pub table_comment: String,
    /// Full DDL statement as reported by the engine.
    pub create_statement: String,
}

/// One row of a table's column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Short type form, e.g. "varchar".
    pub data_type: String,
    /// Full column type, e.g. "varchar(255)".
    pub column_type: String,
    pub comment: String,
    /// Engine-specific flags, e.g. "auto_increment".
    pub extra: String,
}

/// Encryption scope detected for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionScope {
    /// Encryption applied to the entire table's storage (TDE).
    #[serde(rename = "Table-level encryption")]
    TableLevel,
    /// Encryption applied selectively to specific columns.
    #[serde(rename = "Column-level encryption")]
    ColumnLevel,
}

impl std::fmt::Display for EncryptionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncryptionScope::TableLevel => write!(f, "Table-level encryption"),
            EncryptionScope::ColumnLevel => write!(f, "Column-level encryption"),
        }
    }
}

/// Algorithm family inferred from evidence text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "AES")]
    Aes,
    #[serde(rename = "DES")]
    Des,
    #[serde(rename = "3DES")]
    TripleDes,
}

impl std::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncryptionAlgorithm::Aes => write!(f, "AES"),
            EncryptionAlgorithm::Des => write!(f, "DES"),
            EncryptionAlgorithm::TripleDes => write!(f, "3DES"),
        }
    }
}

/// Result of evaluating a single column against the marker vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFinding {
    pub column_name: String,
    pub data_type: String,
    pub column_type: String,
    pub comment: String,
    pub extra: String,
    /// True when any encryption marker matched this column.
    pub encrypted: bool,
    /// True when an encryption-function name (`aes_encrypt`, `decrypt(`,
    /// ...) appeared in the column definition.
    pub function_match: bool,
}

/// Raw evidence retained for audit traceability.
///
/// Exactly one of the table-level fields is populated for a table-level
/// verdict (whichever source text matched first); `encrypted_columns`
/// holds the full per-column evaluation for column-level verdicts,
/// including columns that did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionEvidence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_comment: Option<String>,
    /// Bounded excerpt of the DDL statement that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_columns: Option<Vec<ColumnFinding>>,
}

/// Classification result for one table. Produced once per table scan and
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionVerdict {
    pub encrypted: bool,
    pub encryption_type: Option<EncryptionScope>,
    /// Populated only for table-level verdicts whose evidence text carried
    /// an algorithm token; column-level verdicts never set it.
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    /// Columns that matched a column-level marker, in column order.
    pub encrypted_columns: Vec<ColumnFinding>,
    pub details: EncryptionEvidence,
}

impl EncryptionVerdict {
    /// Canonical negative verdict recorded when neither classifier matches.
    pub fn not_encrypted() -> Self {
        Self {
            encrypted: false,
            encryption_type: None,
            encryption_algorithm: None,
            encrypted_columns: Vec::new(),
            details: EncryptionEvidence::default(),
        }
    }
}

/// Outcome of scanning one table.
///
/// `Failed` is an explicit marker distinct from "not encrypted": one
/// inaccessible table must not masquerade as an unencrypted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableScanStatus {
    /// Classification completed; the verdict may be positive or negative.
    Classified(EncryptionVerdict),
    /// The catalog could not supply metadata or columns for this table.
    Failed { error: String },
}

/// One entry of a scan summary: a table name paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    pub table_name: String,
    pub status: TableScanStatus,
}

impl TableReport {
    /// Returns the verdict if the table was classified.
    pub fn verdict(&self) -> Option<&EncryptionVerdict> {
        match &self.status {
            TableScanStatus::Classified(verdict) => Some(verdict),
            TableScanStatus::Failed { .. } => None,
        }
    }
}

/// Scan metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub scanned_at: chrono::DateTime<chrono::Utc>,
    pub scan_duration_ms: u64,
    pub scanner_version: String,
    pub warnings: Vec<String>,
}

/// Database-level aggregate of per-table verdicts.
///
/// Built incrementally by appending one report per table; table order is
/// the catalog enumeration order and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub format_version: String,
    pub database: String,
    pub total_tables: usize,
    pub encrypted_tables: usize,
    pub unencrypted_tables: usize,
    /// Tables the catalog could not supply metadata for. Counted apart
    /// from the encrypted/unencrypted split so that
    /// `encrypted + unencrypted + failed == total` always holds.
    pub failed_tables: usize,
    /// `encrypted_tables / total_tables * 100`; 0.0 for an empty database.
    pub encryption_rate: f64,
    pub tables: Vec<TableReport>,
    pub scan_metadata: ScanMetadata,
}

/// Report format version for downstream consumers.
const FORMAT_VERSION: &str = "1.0";

impl ScanSummary {
    /// Creates an empty summary for the named database.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            database: database.into(),
            total_tables: 0,
            encrypted_tables: 0,
            unencrypted_tables: 0,
            failed_tables: 0,
            encryption_rate: 0.0,
            tables: Vec::new(),
            scan_metadata: ScanMetadata {
                scanned_at: chrono::Utc::now(),
                scan_duration_ms: 0,
                scanner_version: env!("CARGO_PKG_VERSION").to_string(),
                warnings: Vec::new(),
            },
        }
    }

    /// Appends one table report and updates the counts.
    pub fn record(&mut self, report: TableReport) {
        match &report.status {
            TableScanStatus::Classified(verdict) if verdict.encrypted => {
                self.encrypted_tables += 1;
            }
            TableScanStatus::Classified(_) => self.unencrypted_tables += 1,
            TableScanStatus::Failed { .. } => self.failed_tables += 1,
        }
        self.total_tables += 1;
        self.tables.push(report);
    }

    /// Finalizes the summary after the scan loop completes.
    pub fn finish(&mut self, duration: std::time::Duration) {
        self.encryption_rate = if self.total_tables == 0 {
            0.0
        } else {
            self.encrypted_tables as f64 / self.total_tables as f64 * 100.0
        };
        self.scan_metadata.scan_duration_ms = duration.as_millis() as u64;
    }

    /// Adds a warning to the scan metadata.
    pub fn add_warning(&mut self, warning: String) {
        self.scan_metadata.warnings.push(warning);
    }
}
