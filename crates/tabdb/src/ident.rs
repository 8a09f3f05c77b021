//! Identifier quoting for the MySQL dialect.
//!
//! A bare identifier is wrapped in backticks. A qualified `table.column`
//! reference keeps the qualifier bare and quotes only the column part, so
//! `o.id` renders as ``o.`id` ``. Contents are trusted, not validated;
//! callers own identifier hygiene.

/// Quote a column or table reference.
pub fn escape(identifier: &str) -> String {
    match identifier.split_once('.') {
        None => format!("`{identifier}`"),
        Some((qualifier, name)) => format!("{qualifier}.`{name}`"),
    }
}
