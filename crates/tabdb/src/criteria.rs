//! Criteria maps and WHERE-clause compilation.
//!
//! [`Criteria`] is an ordered field → [`CriteriaValue`] mapping. Insertion
//! order is semantically significant: it determines both the clause order and,
//! combined with prior placeholder counts, positional parameter numbering.
//!
//! [`Criteria::compile`] turns the mapping into a WHERE fragment (without the
//! `where` keyword) plus the flattened parameter sequence, keeping the two in
//! lock-step: the number of `?` placeholders in the fragment always equals the
//! parameter count, in left-to-right order.

use crate::ident;
use crate::value::Value;

/// The value side of one criterion.
///
/// A closed set of operators, exhaustively matched at compile time. Adding an
/// operator means extending this enum and every match site.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaValue {
    /// Bound as a single `=` comparison; one placeholder.
    Scalar(Value),
    /// Bound as `in (...)`; one placeholder per element, in sequence order.
    /// An empty set compiles to the always-false predicate `1=0`.
    Set(Vec<Value>),
    /// Bound as `between ? and ?`; exactly two placeholders, start then end.
    Range { start: Value, end: Value },
}

/// The result of compiling a criteria map.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledWhere {
    /// WHERE fragment without the `where` keyword; empty for empty criteria.
    pub sql: String,
    /// Running placeholder counter after this fragment. Informational for the
    /// `?` dialect, but accounted exactly so callers can chain fragments.
    pub next_index: usize,
    /// Parameters in left-to-right placeholder order.
    pub params: Vec<Value>,
}

/// An ordered field → value criteria map, combined with implicit AND.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    entries: Vec<(String, CriteriaValue)>,
}

impl Criteria {
    /// Create an empty criteria map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an equality criterion: `field = value`.
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.entries
            .push((field.to_string(), CriteriaValue::Scalar(value.into())));
        self
    }

    /// Add a set-membership criterion: `field in (values...)`.
    pub fn in_set<T: Into<Value>>(
        mut self,
        field: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.entries.push((
            field.to_string(),
            CriteriaValue::Set(values.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Add a range criterion: `field between start and end`.
    pub fn between(
        mut self,
        field: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        self.entries.push((
            field.to_string(),
            CriteriaValue::Range {
                start: start.into(),
                end: end.into(),
            },
        ));
        self
    }

    /// Add a pre-built criterion.
    pub fn push(mut self, field: &str, value: CriteriaValue) -> Self {
        self.entries.push((field.to_string(), value));
        self
    }

    /// Whether the map has no criteria.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate criteria in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, CriteriaValue)> {
        self.entries.iter()
    }

    /// Compile into a WHERE fragment and parameter sequence.
    ///
    /// `start_index` is the count of placeholders already consumed earlier in
    /// the same statement (e.g. by an UPDATE's SET clause), so the returned
    /// `next_index` continues the numbering. Emitted placeholders are always
    /// `?` for this dialect.
    pub fn compile(&self, start_index: usize) -> CompiledWhere {
        let mut fragments = Vec::with_capacity(self.entries.len());
        let mut params = Vec::new();
        let mut index = start_index;

        for (field, value) in &self.entries {
            let column = ident::escape(field);
            match value {
                CriteriaValue::Scalar(v) => {
                    index += 1;
                    fragments.push(format!("{column}=?"));
                    params.push(v.clone());
                }
                CriteriaValue::Set(values) => {
                    if values.is_empty() {
                        // An empty set matches nothing; `in ()` is not valid
                        // in the dialect, so compile to always-false.
                        fragments.push("1=0".to_string());
                        continue;
                    }
                    let placeholders = vec!["?"; values.len()].join(", ");
                    index += values.len();
                    fragments.push(format!("{column} in ({placeholders})"));
                    params.extend(values.iter().cloned());
                }
                CriteriaValue::Range { start, end } => {
                    index += 2;
                    fragments.push(format!("{column} between ? and ?"));
                    params.push(start.clone());
                    params.push(end.clone());
                }
            }
        }

        CompiledWhere {
            sql: fragments.join(" and "),
            next_index: index,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_count(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn compile_scalar() {
        let compiled = Criteria::new().eq("id", 5i64).compile(0);
        assert_eq!(compiled.sql, "`id`=?");
        assert_eq!(compiled.next_index, 1);
        assert_eq!(compiled.params, vec![Value::Int(5)]);
    }

    #[test]
    fn compile_joins_with_and_in_insertion_order() {
        let compiled = Criteria::new()
            .eq("status", "active")
            .eq("o.kind", "sale")
            .compile(0);
        assert_eq!(compiled.sql, "`status`=? and o.`kind`=?");
        assert_eq!(
            compiled.params,
            vec![
                Value::Text("active".to_string()),
                Value::Text("sale".to_string())
            ]
        );
    }

    #[test]
    fn compile_set_one_placeholder_per_element() {
        let compiled = Criteria::new().in_set("id", [1i64, 2, 3]).compile(0);
        assert_eq!(compiled.sql, "`id` in (?, ?, ?)");
        assert_eq!(compiled.next_index, 3);
        assert_eq!(
            compiled.params,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn compile_empty_set_is_always_false() {
        let compiled = Criteria::new()
            .in_set::<i64>("id", [])
            .eq("status", "active")
            .compile(0);
        assert_eq!(compiled.sql, "1=0 and `status`=?");
        assert_eq!(compiled.next_index, 1);
        assert_eq!(compiled.params, vec![Value::Text("active".to_string())]);
    }

    #[test]
    fn compile_range_two_params_start_then_end() {
        let compiled = Criteria::new()
            .eq("status", "active")
            .between("age", 18i64, 65i64)
            .compile(0);
        assert_eq!(compiled.sql, "`status`=? and `age` between ? and ?");
        assert_eq!(compiled.next_index, 3);
        assert_eq!(
            compiled.params,
            vec![
                Value::Text("active".to_string()),
                Value::Int(18),
                Value::Int(65)
            ]
        );
    }

    #[test]
    fn compile_empty_criteria() {
        let compiled = Criteria::new().compile(4);
        assert_eq!(compiled.sql, "");
        assert_eq!(compiled.next_index, 4);
        assert!(compiled.params.is_empty());
    }

    #[test]
    fn compile_continues_start_index() {
        let compiled = Criteria::new()
            .in_set("id", [7i64, 8])
            .between("total", 10i64, 20i64)
            .compile(3);
        assert_eq!(compiled.next_index, 7);
    }

    #[test]
    fn placeholders_match_params_in_lockstep() {
        let criteria = Criteria::new()
            .eq("a", 1i64)
            .in_set("b", [2i64, 3, 4])
            .between("c", 5i64, 6i64)
            .eq("d", "x");
        let compiled = criteria.compile(0);
        assert_eq!(placeholder_count(&compiled.sql), compiled.params.len());
        assert_eq!(compiled.next_index, compiled.params.len());
        assert_eq!(
            compiled.params,
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::Int(5),
                Value::Int(6),
                Value::Text("x".to_string())
            ]
        );
    }
}
