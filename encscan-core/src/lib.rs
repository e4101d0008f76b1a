//! Core classification engine and catalog access for encscan.
//!
//! This crate classifies database tables as encrypted or not by matching
//! catalog metadata against known encryption markers. It supports both
//! table-level encryption (TDE-style, detected from creation options,
//! table comments, and DDL) and column-level encryption (detected from
//! column definitions and encryption-function names).
//!
//! # Security Guarantees
//! - All database operations are read-only catalog queries
//! - No credentials stored or logged in any data structures
//! - No row data is ever fetched; classification sees metadata only
//!
//! # Architecture
//! - Pure classification functions over immutable metadata bundles
//! - Repository-style [`catalog::CatalogAccessor`] trait for catalog access
//! - Aggregation loop that records per-table failures and continues

pub mod catalog;
pub mod classify;
pub mod error;
pub mod logging;
pub mod models;
pub mod scan;

// Re-export commonly used types
pub use catalog::{CatalogAccessor, ConnectionConfig, MySqlCatalog};
pub use classify::{classify_columns, classify_table};
pub use error::{Result, ScanError};
pub use logging::init_logging;
pub use models::{
    ColumnDescriptor, ColumnFinding, EncryptionAlgorithm, EncryptionEvidence, EncryptionScope,
    EncryptionVerdict, ScanSummary, TableMetadataBundle, TableReport, TableScanStatus,
};
pub use scan::{ScanProgress, scan, scan_with_progress};
