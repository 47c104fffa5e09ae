pub mod memory;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::InMemoryProvider;

/// Tables the matcher reads. Kept closed so table names never come from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Employees,
    Projects,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Employees => "employees",
            Table::Projects => "projects",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataFetchError {
    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("timed out fetching {0}")]
    Timeout(Table),
    #[error("malformed {table} row: {reason}")]
    Malformed { table: Table, reason: String },
    #[error("data provider unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the employee and project tables.
///
/// Rows are returned as JSON objects exactly as stored; typed parsing happens in
/// [`crate::records`] so every backend shares the same validation.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_all(&self, table: Table) -> Result<Vec<Value>, DataFetchError>;

    /// Cheap connectivity probe used by readiness checks.
    async fn ping(&self) -> Result<(), DataFetchError>;
}
