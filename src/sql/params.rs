//! Owned bind values for the query builder and their binding onto sqlx queries.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value that can be bound to a PostgreSQL query. Columns with a cast in the
/// table descriptor get `$n::cast`, so text ids bind cleanly to uuid columns.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Text(String),
    TextArray(Vec<String>),
}

impl BindValue {
    /// Empty strings bind as NULL (unset foreign keys from the admin form).
    pub fn text_or_null(s: &str) -> Self {
        if s.is_empty() {
            BindValue::Null
        } else {
            BindValue::Text(s.to_string())
        }
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<bool> for BindValue {
    fn from(b: bool) -> Self {
        BindValue::Bool(b)
    }
}

impl From<i32> for BindValue {
    fn from(n: i32) -> Self {
        BindValue::I64(n as i64)
    }
}

impl From<f64> for BindValue {
    fn from(n: f64) -> Self {
        BindValue::F64(n)
    }
}

impl From<Vec<String>> for BindValue {
    fn from(v: Vec<String>) -> Self {
        BindValue::TextArray(v)
    }
}

/// Bind every value in order.
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &[BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p.clone() {
            BindValue::Null => query.bind(None::<String>),
            BindValue::Bool(b) => query.bind(b),
            BindValue::I64(n) => query.bind(n),
            BindValue::F64(n) => query.bind(n),
            BindValue::Text(s) => query.bind(s),
            BindValue::TextArray(v) => query.bind(v),
        };
    }
    query
}
