use async_trait::async_trait;
use serde_json::Value;

use super::{DataFetchError, DataProvider, Table};

/// Fixed in-memory tables, used by tests and local runs without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    employees: Vec<Value>,
    projects: Vec<Value>,
    failure: Option<String>,
}

impl InMemoryProvider {
    pub fn new(employees: Vec<Value>, projects: Vec<Value>) -> Self {
        Self {
            employees,
            projects,
            failure: None,
        }
    }

    /// Every call fails with [`DataFetchError::Unavailable`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), DataFetchError> {
        match &self.failure {
            Some(message) => Err(DataFetchError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DataProvider for InMemoryProvider {
    async fn fetch_all(&self, table: Table) -> Result<Vec<Value>, DataFetchError> {
        self.check_available()?;

        let rows = match table {
            Table::Employees => &self.employees,
            Table::Projects => &self.projects,
        };
        Ok(rows.clone())
    }

    async fn ping(&self) -> Result<(), DataFetchError> {
        self.check_available()
    }
}
