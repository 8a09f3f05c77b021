//! Ordered field maps for INSERT and UPDATE.

use crate::value::Value;

/// The value side of one field assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Parameterized value; contributes one placeholder.
    Bound(Value),
    /// Caller-trusted SQL expression inserted verbatim, bypassing
    /// parameterization. Never appears in the parameter sequence.
    Raw(String),
}

/// An ordered field → value map for insert/update. Field order is preserved
/// in the generated column list and parameter sequence.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a bound field value.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.entries
            .push((field.to_string(), FieldValue::Bound(value.into())));
        self
    }

    /// Set an optional bound field value (None => skip).
    pub fn set_opt(self, field: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    /// Set a raw SQL expression, e.g. `now()`.
    pub fn set_raw(mut self, field: &str, expr: &str) -> Self {
        self.entries
            .push((field.to_string(), FieldValue::Raw(expr.to_string())));
        self
    }

    /// Whether the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let fields = Fields::new()
            .set("name", "Bob")
            .set_raw("updated_at", "now()")
            .set("age", 30i64);
        let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["name", "updated_at", "age"]);
    }

    #[test]
    fn set_opt_skips_none() {
        let fields = Fields::new()
            .set_opt("name", Some("Bob"))
            .set_opt("email", None::<&str>);
        assert_eq!(fields.len(), 1);
    }
}
