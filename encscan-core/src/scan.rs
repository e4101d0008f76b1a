//! Scan aggregation across all tables of a database.
//!
//! The aggregator drives the classifiers over the catalog's table list and
//! accumulates per-table verdicts into a [`ScanSummary`]. It owns no I/O
//! sink and no global state; progress is surfaced through an explicit
//! callback threaded into the loop.

use crate::Result;
use crate::catalog::CatalogAccessor;
use crate::classify::{classify_columns, classify_table};
use crate::models::{EncryptionVerdict, ScanSummary, TableReport, TableScanStatus};

/// Progress event emitted once per table as the scan advances.
#[derive(Debug, Clone)]
pub struct ScanProgress<'a> {
    /// 1-based position of this table in the enumeration order.
    pub index: usize,
    pub total: usize,
    pub table_name: &'a str,
    pub status: &'a TableScanStatus,
}

/// Callback invoked once per scanned table.
pub type ProgressFn<'f> = dyn for<'a> Fn(ScanProgress<'a>) + Send + Sync + 'f;

/// Scans every table of the catalog's database.
///
/// # Errors
/// Returns error only if table enumeration itself fails; per-table fetch
/// failures are recorded as [`TableScanStatus::Failed`] and the scan
/// continues, so one inaccessible table cannot hide results for the rest
/// of the database.
pub async fn scan(catalog: &dyn CatalogAccessor) -> Result<ScanSummary> {
    scan_with_progress(catalog, &|_| {}).await
}

/// Scans every table, reporting per-table progress through a callback.
///
/// Tables are classified in catalog enumeration order and the summary
/// preserves that order.
///
/// # Errors
/// Same failure behavior as [`scan`].
pub async fn scan_with_progress(
    catalog: &dyn CatalogAccessor,
    on_progress: &ProgressFn<'_>,
) -> Result<ScanSummary> {
    let start = std::time::Instant::now();
    let database = catalog.database_name().to_string();

    tracing::info!("Scanning database '{}' for encrypted tables", database);

    let tables = catalog.list_tables().await?;
    let total = tables.len();
    tracing::info!("Found {} tables to scan", total);

    let mut summary = ScanSummary::new(database);

    for (position, table_name) in tables.iter().enumerate() {
        tracing::debug!("Scanning table '{}'", table_name);

        let status = match scan_table(catalog, table_name).await {
            Ok(verdict) => TableScanStatus::Classified(verdict),
            Err(e) => {
                let warning = format!("Failed to scan table '{}': {}", table_name, e);
                tracing::warn!("{}", warning);
                summary.add_warning(warning);
                TableScanStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        on_progress(ScanProgress {
            index: position + 1,
            total,
            table_name,
            status: &status,
        });

        summary.record(TableReport {
            table_name: table_name.clone(),
            status,
        });
    }

    summary.finish(start.elapsed());

    tracing::info!(
        "Scan completed in {:.2}s: {} encrypted, {} unencrypted, {} failed",
        start.elapsed().as_secs_f64(),
        summary.encrypted_tables,
        summary.unencrypted_tables,
        summary.failed_tables,
    );

    Ok(summary)
}

/// Classifies one table: table-level first, then column-level, then the
/// canonical negative verdict.
async fn scan_table(catalog: &dyn CatalogAccessor, table: &str) -> Result<EncryptionVerdict> {
    let bundle = catalog.table_metadata(table).await?;

    if let Some(verdict) = classify_table(&bundle) {
        return Ok(verdict);
    }

    let columns = catalog.table_columns(table).await?;
    Ok(classify_columns(&columns).unwrap_or_else(EncryptionVerdict::not_encrypted))
}
