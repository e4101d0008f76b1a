//! Report sinks for scan results.
//!
//! Renders a `ScanSummary` to the console and writes the JSON report.
//! No classification logic lives here.

use encscan_core::{Result, ScanSummary, TableScanStatus};
use std::path::PathBuf;

/// Prints a human-readable summary of the scan results.
pub fn print_summary(summary: &ScanSummary) {
    println!();
    println!("{}", "=".repeat(60));
    println!("ENCRYPTION SCAN SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Database: {}", summary.database);
    println!("Total Tables: {}", summary.total_tables);
    println!("Encrypted Tables: {}", summary.encrypted_tables);
    println!("Unencrypted Tables: {}", summary.unencrypted_tables);
    if summary.failed_tables > 0 {
        println!("Failed Tables: {}", summary.failed_tables);
    }
    println!("Encryption Rate: {:.1}%", summary.encryption_rate);

    println!();
    println!("DETAILED RESULTS:");
    println!("{}", "-".repeat(60));

    for table in &summary.tables {
        match &table.status {
            TableScanStatus::Classified(verdict) if verdict.encrypted => {
                println!("{:<30} ENCRYPTED", table.table_name);
                if let Some(scope) = &verdict.encryption_type {
                    println!("  Type: {}", scope);
                }
                if let Some(algorithm) = &verdict.encryption_algorithm {
                    println!("  Algorithm: {}", algorithm);
                }
                if !verdict.encrypted_columns.is_empty() {
                    println!("  Encrypted Columns: {}", verdict.encrypted_columns.len());
                }
            }
            TableScanStatus::Classified(_) => {
                println!("{:<30} NOT ENCRYPTED", table.table_name);
            }
            TableScanStatus::Failed { error } => {
                println!("{:<30} SCAN FAILED", table.table_name);
                println!("  Error: {}", error);
            }
        }
    }
}

/// Default report filename derived from the scan results.
pub fn default_output_path(summary: &ScanSummary) -> PathBuf {
    PathBuf::from(format!(
        "encryption_scan_{}_{}_tables.json",
        summary.database, summary.total_tables
    ))
}

/// Writes the JSON report to a file.
pub async fn save_summary(summary: &ScanSummary, output_path: &PathBuf) -> Result<()> {
    let json_data =
        serde_json::to_string_pretty(summary).map_err(|e| encscan_core::ScanError::Serialization {
            context: "JSON report serialization".to_string(),
            source: e,
        })?;

    tokio::fs::write(output_path, json_data)
        .await
        .map_err(|e| encscan_core::ScanError::Io {
            context: format!("Failed to write to {}", output_path.display()),
            source: e,
        })?;

    Ok(())
}
