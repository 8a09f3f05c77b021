//! Per-operation statement assembly.
//!
//! Each builder is a pure function from (table, criteria, fields, clauses) to
//! a [`Statement`]: one SQL string plus one parameter sequence, built fresh
//! per call. The WHERE prefix (`" where "`) is owned here, not by the
//! criteria compiler. Mutation builders guarded against accidental
//! full-table writes return `None` instead of a statement.

use crate::clause::{self, OrderBy};
use crate::criteria::Criteria;
use crate::fields::{FieldValue, Fields};
use crate::ident;
use crate::value::Value;

/// A compiled statement: SQL text and its positional parameters.
///
/// Invariant: the count of `?` placeholders in `sql` equals `params.len()`,
/// and their left-to-right order matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Build `select * from <table>` + WHERE + ORDER BY + LIMIT/OFFSET.
pub fn build_select(
    table: &str,
    criteria: &Criteria,
    order: Option<&OrderBy>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Statement {
    let mut sql = format!("select * from {}", ident::escape(table));
    let compiled = criteria.compile(0);
    if !compiled.sql.is_empty() {
        sql.push_str(" where ");
        sql.push_str(&compiled.sql);
    }
    sql.push_str(&clause::order_by(order));
    sql.push_str(&clause::limit(limit, offset));
    Statement {
        sql,
        params: compiled.params,
    }
}

/// Build `insert into <table> (<fields...>) values (<?-or-raw...>)`.
///
/// Field order is preserved; only bound fields contribute parameters, in
/// field order. Raw expressions land in the VALUES list verbatim.
pub fn build_insert(table: &str, fields: &Fields) -> Statement {
    let mut columns = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    let mut params = Vec::new();

    for (name, value) in fields.iter() {
        columns.push(ident::escape(name));
        match value {
            FieldValue::Bound(v) => {
                values.push("?".to_string());
                params.push(v.clone());
            }
            FieldValue::Raw(expr) => values.push(expr.clone()),
        }
    }

    Statement {
        sql: format!(
            "insert into {} ({}) values ({})",
            ident::escape(table),
            columns.join(", "),
            values.join(", ")
        ),
        params,
    }
}

/// Build `update <table> set ... where ...`.
///
/// Returns `None` when criteria or fields is empty, so callers never issue an
/// unbounded update. The bound SET count seeds the criteria compiler's
/// placeholder counter; the final parameter sequence is the bound SET values
/// followed by the WHERE parameters.
pub fn build_update(table: &str, fields: &Fields, criteria: &Criteria) -> Option<Statement> {
    if criteria.is_empty() || fields.is_empty() {
        return None;
    }

    let mut set_parts = Vec::with_capacity(fields.len());
    let mut params = Vec::new();
    for (name, value) in fields.iter() {
        let column = ident::escape(name);
        match value {
            FieldValue::Bound(v) => {
                set_parts.push(format!("{column}=?"));
                params.push(v.clone());
            }
            FieldValue::Raw(expr) => set_parts.push(format!("{column}={expr}")),
        }
    }

    let compiled = criteria.compile(params.len());
    let sql = format!(
        "update {} set {} where {}",
        ident::escape(table),
        set_parts.join(", "),
        compiled.sql
    );
    params.extend(compiled.params);
    Some(Statement { sql, params })
}

/// Build `delete from <table> where ...`.
///
/// Returns `None` when criteria is empty (full-table delete guard).
pub fn build_delete(table: &str, criteria: &Criteria) -> Option<Statement> {
    if criteria.is_empty() {
        return None;
    }
    let compiled = criteria.compile(0);
    Some(Statement {
        sql: format!(
            "delete from {} where {}",
            ident::escape(table),
            compiled.sql
        ),
        params: compiled.params,
    })
}

/// Build `select count(*) from <table>` + WHERE.
pub fn build_count(table: &str, criteria: &Criteria) -> Statement {
    let mut sql = format!("select count(*) from {}", ident::escape(table));
    let compiled = criteria.compile(0);
    if !compiled.sql.is_empty() {
        sql.push_str(" where ");
        sql.push_str(&compiled.sql);
    }
    Statement {
        sql,
        params: compiled.params,
    }
}
