//! # tabdb
//!
//! A thin, table-oriented access adapter over a SQL connection.
//!
//! tabdb builds parameterized statements from structured criteria and exposes
//! CRUD primitives (select, insert, update, delete, count). It is not an ORM
//! and not a query planner: there is no object hydration, no joins or
//! subqueries, and AND is the only conjunction. Statement execution lives
//! behind the [`SqlExecutor`] capability trait, so the core stays
//! driver-agnostic.
//!
//! ## Example
//!
//! ```ignore
//! use tabdb::{Adapter, Criteria, Fields, OrderBy};
//!
//! let adapter = Adapter::new(executor);
//!
//! // SELECT
//! let open = Criteria::new()
//!     .eq("status", "open")
//!     .between("total", 10i64, 100i64);
//! let rows = adapter
//!     .select_by("orders", &open, Some(&OrderBy::desc("created_at")), Some(20), None)
//!     .await?;
//!
//! // UPDATE (refuses to run without criteria)
//! let changed = adapter
//!     .update(
//!         "users",
//!         &Fields::new().set("name", "Bob").set_raw("updated_at", "now()"),
//!         &Criteria::new().eq("id", 5i64),
//!     )
//!     .await?;
//! ```
//!
//! ## Safety defaults
//!
//! `update` and `delete` with empty criteria (or an empty field map) return
//! `Ok(false)` and send nothing to the executor. An empty `in` set compiles
//! to the always-false predicate `1=0`.

pub mod adapter;
pub mod clause;
pub mod config;
pub mod criteria;
pub mod error;
pub mod executor;
pub mod fields;
pub mod ident;
pub mod statement;
pub mod value;

pub use adapter::Adapter;
pub use clause::{Direction, OrderBy};
pub use config::ConnectionConfig;
pub use criteria::{CompiledWhere, Criteria, CriteriaValue};
pub use error::{AdapterError, AdapterResult};
pub use executor::SqlExecutor;
pub use fields::{FieldValue, Fields};
pub use statement::Statement;
pub use value::{Row, Value};
