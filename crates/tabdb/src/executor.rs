//! The SQL executor capability trait.
//!
//! Everything that touches a live connection lives behind [`SqlExecutor`]:
//! prepare a statement, bind parameters by 1-based position, execute, fetch.
//! The adapter composes statements and makes exactly one round-trip per
//! operation; implementations own connection acquisition, driver
//! configuration and wire details, and map driver failures into
//! [`AdapterError::Executor`](crate::AdapterError::Executor).

use crate::error::AdapterResult;
use crate::value::{Row, Value};

/// Capability for running prepared, positionally-bound SQL statements.
pub trait SqlExecutor: Send + Sync {
    /// Execute a query and return all rows as ordered field → value maps.
    fn query(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = AdapterResult<Vec<Row>>> + Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = AdapterResult<u64>> + Send;

    /// Execute a query and return the first row, if any.
    fn query_row(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = AdapterResult<Option<Row>>> + Send {
        async move {
            let rows = self.query(sql, params).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Execute a query and return the first column of every row.
    fn query_col(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = AdapterResult<Vec<Value>>> + Send {
        async move {
            let rows = self.query(sql, params).await?;
            Ok(rows
                .into_iter()
                .filter_map(|row| row.into_iter().next().map(|(_, v)| v))
                .collect())
        }
    }

    /// Execute a query and return the first column of the first row, if any.
    fn query_scalar(
        &self,
        sql: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = AdapterResult<Option<Value>>> + Send {
        async move {
            let row = self.query_row(sql, params).await?;
            Ok(row.and_then(|r| r.into_iter().next().map(|(_, v)| v)))
        }
    }

    /// Open a transaction on the underlying connection.
    fn begin_transaction(&self) -> impl std::future::Future<Output = AdapterResult<()>> + Send;

    /// Commit the current transaction.
    fn commit(&self) -> impl std::future::Future<Output = AdapterResult<()>> + Send;

    /// Roll back the current transaction.
    fn rollback(&self) -> impl std::future::Future<Output = AdapterResult<()>> + Send;
}
