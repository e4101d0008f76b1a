//! Catalog accessor trait and configuration for metadata access.
//!
//! The scan aggregator consumes catalog metadata exclusively through the
//! [`CatalogAccessor`] trait; the MySQL implementation lives in `mysql`.
//! The design is object-safe so scans can run against
//! `&dyn CatalogAccessor`, including in-memory test doubles.

use crate::Result;
use crate::models::{ColumnDescriptor, TableMetadataBundle};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod mysql;

pub use mysql::MySqlCatalog;

/// Read-only access to a database's catalog metadata.
///
/// # Security Guarantees
/// - All operations are read-only
/// - Credentials are never stored or logged
/// - Connection strings are sanitized in error messages
///
/// Absent catalog fields must be mapped to empty strings by the
/// implementation, never surfaced as errors.
#[async_trait]
pub trait CatalogAccessor: Send + Sync {
    /// Name of the database this accessor is bound to.
    fn database_name(&self) -> &str;

    /// Tests connectivity and catalog access without scanning.
    ///
    /// # Errors
    /// Returns error if the connection fails or the catalog is not
    /// readable with the current privileges.
    async fn test_connection(&self) -> Result<()>;

    /// Enumerates base table names in catalog order.
    ///
    /// # Errors
    /// Returns error if table enumeration fails.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Fetches the metadata bundle for one table.
    ///
    /// # Errors
    /// Returns a catalog error if the fetch fails (connectivity loss,
    /// permission denial, table dropped mid-scan).
    async fn table_metadata(&self, table: &str) -> Result<TableMetadataBundle>;

    /// Fetches the ordered column list for one table.
    ///
    /// # Errors
    /// Returns a catalog error if the fetch fails.
    async fn table_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}

/// Configuration for database connections.
///
/// # Security
/// This struct intentionally does NOT store passwords or credentials.
/// Credentials must be handled separately and never logged or serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Database host address
    pub host: String,
    /// Optional port number
    pub port: Option<u16>,
    /// Optional database name
    pub database: Option<String>,
    /// Optional username (password handled separately)
    pub username: Option<String>,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Query timeout duration
    pub query_timeout: Duration,
    /// Maximum number of connections in pool
    pub max_connections: u32,
    /// Whether to enforce read-only mode
    pub read_only: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: None,
            database: None,
            username: None,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(30),
            max_connections: 10,
            read_only: true,
        }
    }
}

impl std::fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectionConfig({}{}{})",
            self.host,
            self.port.map_or_else(String::new, |p| format!(":{}", p)),
            self.database
                .as_ref()
                .map_or_else(String::new, |db| format!("/{}", db))
        )
        // Intentionally omit username and never include credentials
    }
}

impl ConnectionConfig {
    /// Creates a new connection config with safe defaults.
    pub fn new(host: String) -> Self {
        Self {
            host,
            ..Default::default()
        }
    }

    /// Validates connection configuration parameters.
    ///
    /// # Errors
    /// Returns error if configuration values are invalid or unsafe
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(crate::error::ScanError::configuration(
                "host cannot be empty",
            ));
        }

        if let Some(port) = self.port
            && port == 0
        {
            return Err(crate::error::ScanError::configuration(
                "port must be greater than 0",
            ));
        }

        if self.max_connections == 0 {
            return Err(crate::error::ScanError::configuration(
                "max_connections must be greater than 0",
            ));
        }

        if self.max_connections > 100 {
            return Err(crate::error::ScanError::configuration(
                "max_connections should not exceed 100 for safety",
            ));
        }

        if self.connect_timeout.as_secs() == 0 {
            return Err(crate::error::ScanError::configuration(
                "connect_timeout must be greater than 0",
            ));
        }

        if self.query_timeout.as_secs() == 0 {
            return Err(crate::error::ScanError::configuration(
                "query_timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Builder method to set port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builder method to set database.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Builder method to set username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }
}

/// Safely redacts credentials from database connection URLs.
///
/// Delegates to [`crate::error::redact_database_url`] for consistency.
#[inline]
pub fn redact_database_url(url: &str) -> String {
    crate::error::redact_database_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_default() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, None);
        assert_eq!(config.max_connections, 10);
        assert!(config.read_only);
    }

    #[test]
    fn test_connection_config_validation() {
        // Valid config should pass
        let config = ConnectionConfig::new("localhost".to_string());
        assert!(config.validate().is_ok());

        // Empty host should fail
        let config = ConnectionConfig {
            host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Invalid port should fail
        let config = ConnectionConfig {
            port: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Too many connections should fail
        let config = ConnectionConfig {
            max_connections: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connection_config_builder() {
        let config = ConnectionConfig::new("example.com".to_string())
            .with_port(3306)
            .with_database("shop".to_string())
            .with_username("auditor".to_string());

        assert_eq!(config.host, "example.com");
        assert_eq!(config.port, Some(3306));
        assert_eq!(config.database, Some("shop".to_string()));
        assert_eq!(config.username, Some("auditor".to_string()));
    }

    #[test]
    fn test_connection_config_display_no_credentials() {
        let config = ConnectionConfig::new("example.com".to_string())
            .with_port(3306)
            .with_database("shop".to_string())
            .with_username("auditor".to_string());

        let display = format!("{}", config);

        assert!(display.contains("example.com"));
        assert!(display.contains("3306"));
        assert!(display.contains("shop"));

        // Should NOT contain username (security)
        assert!(!display.contains("auditor"));
    }
}
