//! ORDER BY and LIMIT/OFFSET fragment synthesis.
//!
//! These fragments carry no parameters: validated scalars are interpolated
//! directly, since LIMIT/OFFSET are rarely bindable across dialects.

/// Sort direction for a structured ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// ORDER BY specification.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderBy {
    /// Caller-trusted fragment interpolated verbatim, e.g. `"created_at desc"`.
    /// Not escaped; never interpolate untrusted input here.
    Raw(String),
    /// Single column with an explicit direction.
    Column(String, Direction),
}

impl OrderBy {
    /// Order ascending by a column.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::Column(field.into(), Direction::Asc)
    }

    /// Order descending by a column.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::Column(field.into(), Direction::Desc)
    }

    /// A caller-trusted raw ordering fragment.
    pub fn raw(fragment: impl Into<String>) -> Self {
        OrderBy::Raw(fragment.into())
    }
}

/// Render the ORDER BY fragment, leading space included; empty for `None`.
pub fn order_by(spec: Option<&OrderBy>) -> String {
    match spec {
        None => String::new(),
        Some(OrderBy::Raw(fragment)) => format!(" order by {fragment}"),
        Some(OrderBy::Column(field, direction)) => {
            format!(" order by {field} {}", direction.as_str())
        }
    }
}

/// Render the LIMIT/OFFSET fragment. Each present value is interpolated
/// directly; absent values contribute nothing. Negative values are the
/// caller's responsibility.
pub fn limit(limit: Option<i64>, offset: Option<i64>) -> String {
    let mut sql = String::new();
    if let Some(n) = limit {
        sql.push_str(&format!(" limit {n}"));
    }
    if let Some(n) = offset {
        sql.push_str(&format!(" offset {n}"));
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_none_is_empty() {
        assert_eq!(order_by(None), "");
    }

    #[test]
    fn order_by_raw_is_verbatim() {
        let spec = OrderBy::raw("created_at desc, id");
        assert_eq!(order_by(Some(&spec)), " order by created_at desc, id");
    }

    #[test]
    fn order_by_column_with_direction() {
        assert_eq!(order_by(Some(&OrderBy::asc("name"))), " order by name asc");
        assert_eq!(order_by(Some(&OrderBy::desc("id"))), " order by id desc");
    }

    #[test]
    fn limit_and_offset_independent() {
        assert_eq!(limit(None, None), "");
        assert_eq!(limit(Some(10), None), " limit 10");
        assert_eq!(limit(None, Some(20)), " offset 20");
        assert_eq!(limit(Some(10), Some(20)), " limit 10 offset 20");
    }
}
