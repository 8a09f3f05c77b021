//! The table adapter: CRUD operations plus transaction bookkeeping.
//!
//! Every operation is a stateless transformation from (table, criteria,
//! fields) to one statement, followed by a single executor round-trip. No
//! retries, no statement caching; executor failures propagate verbatim.
//!
//! The transaction-in-progress flag is the adapter's only mutable state and
//! is not synchronized. Callers must not drive one adapter from multiple
//! tasks without external coordination.

use tracing::{debug, warn};

use crate::clause::OrderBy;
use crate::criteria::Criteria;
use crate::error::{AdapterError, AdapterResult};
use crate::executor::SqlExecutor;
use crate::fields::Fields;
use crate::statement;
use crate::value::{Row, Value};

/// A table-oriented adapter over a [`SqlExecutor`].
#[derive(Debug)]
pub struct Adapter<E> {
    executor: E,
    in_transaction: bool,
}

impl<E: SqlExecutor> Adapter<E> {
    /// Wrap an executor.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            in_transaction: false,
        }
    }

    /// Borrow the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Unwrap back into the executor.
    pub fn into_inner(self) -> E {
        self.executor
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.in_transaction
    }

    // ==================== table operations ====================

    /// Select all rows matching `criteria`, with optional ordering and
    /// limit/offset. Zero matching rows is `Ok(vec![])`, never an error.
    pub async fn select_by(
        &self,
        table: &str,
        criteria: &Criteria,
        order: Option<&OrderBy>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AdapterResult<Vec<Row>> {
        let stmt = statement::build_select(table, criteria, order, limit, offset);
        debug!(table, sql = %stmt.sql, params = stmt.params.len(), "select_by");
        self.executor.query(&stmt.sql, &stmt.params).await
    }

    /// Insert one row. Returns the executor's affected-row count; generated
    /// keys are not retrieved.
    pub async fn insert(&self, table: &str, fields: &Fields) -> AdapterResult<u64> {
        let stmt = statement::build_insert(table, fields);
        debug!(table, sql = %stmt.sql, params = stmt.params.len(), "insert");
        self.executor.execute(&stmt.sql, &stmt.params).await
    }

    /// Update rows matching `criteria`. Returns `Ok(false)` without touching
    /// the executor when criteria or fields is empty, guarding against
    /// accidental full-table mutation.
    pub async fn update(
        &self,
        table: &str,
        fields: &Fields,
        criteria: &Criteria,
    ) -> AdapterResult<bool> {
        let Some(stmt) = statement::build_update(table, fields, criteria) else {
            warn!(table, "update skipped: empty criteria or empty field map");
            return Ok(false);
        };
        debug!(table, sql = %stmt.sql, params = stmt.params.len(), "update");
        self.executor.execute(&stmt.sql, &stmt.params).await?;
        Ok(true)
    }

    /// Delete rows matching `criteria`. Returns `Ok(false)` without touching
    /// the executor when criteria is empty.
    pub async fn delete(&self, table: &str, criteria: &Criteria) -> AdapterResult<bool> {
        let Some(stmt) = statement::build_delete(table, criteria) else {
            warn!(table, "delete skipped: empty criteria");
            return Ok(false);
        };
        debug!(table, sql = %stmt.sql, params = stmt.params.len(), "delete");
        self.executor.execute(&stmt.sql, &stmt.params).await?;
        Ok(true)
    }

    /// Count rows matching `criteria`. An absent or NULL scalar coerces to 0.
    pub async fn count(&self, table: &str, criteria: &Criteria) -> AdapterResult<i64> {
        let stmt = statement::build_count(table, criteria);
        debug!(table, sql = %stmt.sql, params = stmt.params.len(), "count");
        let scalar = self.executor.query_scalar(&stmt.sql, &stmt.params).await?;
        Ok(scalar.map_or(0, |v| v.as_i64()))
    }

    // ==================== raw statement passthroughs ====================

    /// Run a caller-provided query and return all rows.
    pub async fn select(&self, sql: &str, params: &[Value]) -> AdapterResult<Vec<Row>> {
        debug!(sql, params = params.len(), "select");
        self.executor.query(sql, params).await
    }

    /// Run a caller-provided query and return the first row, if any.
    pub async fn select_row(&self, sql: &str, params: &[Value]) -> AdapterResult<Option<Row>> {
        debug!(sql, params = params.len(), "select_row");
        self.executor.query_row(sql, params).await
    }

    /// Run a caller-provided query and return the first column of every row.
    pub async fn select_col(&self, sql: &str, params: &[Value]) -> AdapterResult<Vec<Value>> {
        debug!(sql, params = params.len(), "select_col");
        self.executor.query_col(sql, params).await
    }

    /// Run a caller-provided query and return a single scalar, if any.
    pub async fn select_cell(&self, sql: &str, params: &[Value]) -> AdapterResult<Option<Value>> {
        debug!(sql, params = params.len(), "select_cell");
        self.executor.query_scalar(sql, params).await
    }

    /// Run a caller-provided statement and return the affected-row count.
    pub async fn execute(&self, sql: &str, params: &[Value]) -> AdapterResult<u64> {
        debug!(sql, params = params.len(), "execute");
        self.executor.execute(sql, params).await
    }

    // ==================== transactions ====================

    /// Open a transaction. Nesting is disallowed; beginning while one is
    /// already active is a logic error.
    pub async fn begin(&mut self) -> AdapterResult<()> {
        if self.in_transaction {
            return Err(AdapterError::transaction("transaction already started"));
        }
        self.executor.begin_transaction().await?;
        self.in_transaction = true;
        Ok(())
    }

    /// Commit the open transaction. Committing without one is a logic error.
    pub async fn commit(&mut self) -> AdapterResult<()> {
        if !self.in_transaction {
            return Err(AdapterError::transaction("transaction not started"));
        }
        self.executor.commit().await?;
        self.in_transaction = false;
        Ok(())
    }

    /// Roll back the open transaction. Rolling back without one is a logic
    /// error.
    pub async fn rollback(&mut self) -> AdapterResult<()> {
        if !self.in_transaction {
            return Err(AdapterError::transaction("transaction not started"));
        }
        self.executor.rollback().await?;
        self.in_transaction = false;
        Ok(())
    }
}
