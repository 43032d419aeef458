//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the listing tables.
//! Every statement yields one `jsonb` column named `row`, decoded with serde.

use crate::sql::params::BindValue;

/// Static description of a backend table. `casts` maps columns to the SQL type
/// their placeholders are cast to.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub casts: &'static [(&'static str, &'static str)],
}

impl Table {
    fn cast_for(&self, column: &str) -> Option<&'static str> {
        self.casts.iter().find(|(c, _)| *c == column).map(|(_, t)| *t)
    }

    fn placeholder(&self, column: &str, n: u32) -> String {
        match self.cast_for(column) {
            Some(t) => format!("${}::{}", n, t),
            None => format!("${}", n),
        }
    }
}

pub const PROPERTIES: Table = Table {
    name: "properties",
    casts: &[
        ("id", "uuid"),
        ("price", "numeric"),
        ("bedrooms", "int4"),
        ("bathrooms", "int4"),
        ("features", "text[]"),
        ("location_id", "uuid"),
        ("property_type_id", "uuid"),
    ],
};

pub const LOCATIONS: Table = Table {
    name: "locations",
    casts: &[("id", "uuid")],
};

pub const PROPERTY_TYPES: Table = Table {
    name: "property_types",
    casts: &[("id", "uuid")],
};

pub const MEDIA: Table = Table {
    name: "media",
    casts: &[("id", "uuid"), ("property_id", "uuid")],
};

pub const INQUIRIES: Table = Table {
    name: "inquiries",
    casts: &[],
};

/// Direction of a related include: to_one (we hold the FK) or to_many (they hold it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncludeDirection {
    ToOne,
    ToMany,
}

/// One relational include, rendered as a scalar subquery keyed under `name`.
#[derive(Clone, Copy, Debug)]
pub struct Include {
    pub name: &'static str,
    pub direction: IncludeDirection,
    pub related: &'static Table,
    pub our_key: &'static str,
    pub their_key: &'static str,
    /// Columns to project; empty means all.
    pub columns: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Eq(&'static str, BindValue),
    NotEq(&'static str, BindValue),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Order { column, ascending: true }
    }

    pub fn desc(column: &'static str) -> Self {
        Order { column, ascending: false }
    }
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn push_param(&mut self, v: BindValue) -> u32 {
        self.params.push(v);
        self.params.len() as u32
    }
}

const MAIN_ALIAS: &str = "main";

/// Quote identifier for PostgreSQL (identifiers come from the table descriptors only).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn projection(columns: &[&str]) -> String {
    if columns.is_empty() {
        "*".to_string()
    } else {
        columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
    }
}

fn include_expr(inc: &Include) -> String {
    let sub_from = format!(
        "{} WHERE {} = {}.{}",
        quoted(inc.related.name),
        quoted(inc.their_key),
        MAIN_ALIAS,
        quoted(inc.our_key)
    );
    let cols = projection(inc.columns);
    match inc.direction {
        IncludeDirection::ToOne => format!(
            "(SELECT to_jsonb(sub) FROM (SELECT {} FROM {} LIMIT 1) sub)",
            cols, sub_from
        ),
        IncludeDirection::ToMany => format!(
            "(SELECT COALESCE(jsonb_agg(to_jsonb(sub)), '[]'::jsonb) FROM (SELECT {} FROM {}) sub)",
            cols, sub_from
        ),
    }
}

/// SELECT rows of `table` as jsonb, each include merged in as a key.
pub fn select(
    table: &Table,
    includes: &[Include],
    filters: &[Filter],
    order: Option<Order>,
    limit: Option<u32>,
) -> QueryBuf {
    let mut q = QueryBuf::default();

    let row_expr = if includes.is_empty() {
        format!("to_jsonb({})", MAIN_ALIAS)
    } else {
        let pairs = includes
            .iter()
            .map(|inc| format!("'{}', {}", inc.name, include_expr(inc)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("to_jsonb({}) || jsonb_build_object({})", MAIN_ALIAS, pairs)
    };

    let mut where_parts = Vec::new();
    for f in filters {
        let (col, op, val) = match f {
            Filter::Eq(c, v) => (*c, "=", v),
            Filter::NotEq(c, v) => (*c, "<>", v),
        };
        let n = q.push_param(val.clone());
        where_parts.push(format!(
            "{}.{} {} {}",
            MAIN_ALIAS,
            quoted(col),
            op,
            table.placeholder(col, n)
        ));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let order_clause = order
        .map(|o| {
            format!(
                " ORDER BY {}.{} {}",
                MAIN_ALIAS,
                quoted(o.column),
                if o.ascending { "ASC" } else { "DESC" }
            )
        })
        .unwrap_or_default();
    let limit_clause = limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();

    q.sql = format!(
        "SELECT {} AS row FROM {} {}{}{}{}",
        row_expr,
        quoted(table.name),
        MAIN_ALIAS,
        where_clause,
        order_clause,
        limit_clause
    );
    q
}

/// INSERT one row; returns the created row.
pub fn insert(table: &Table, values: &[(&'static str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::default();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val.clone());
        cols.push(quoted(col));
        placeholders.push(table.placeholder(col, n));
    }
    q.sql = format!(
        "INSERT INTO {} AS {} ({}) VALUES ({}) RETURNING to_jsonb({}) AS row",
        quoted(table.name),
        MAIN_ALIAS,
        cols.join(", "),
        placeholders.join(", "),
        MAIN_ALIAS
    );
    q
}

/// UPDATE one row by id; returns the updated row.
pub fn update(table: &Table, id: &str, values: &[(&'static str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::default();
    let mut sets = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val.clone());
        sets.push(format!("{} = {}", quoted(col), table.placeholder(col, n)));
    }
    let n = q.push_param(BindValue::from(id));
    q.sql = format!(
        "UPDATE {} AS {} SET {} WHERE {}.{} = {} RETURNING to_jsonb({}) AS row",
        quoted(table.name),
        MAIN_ALIAS,
        sets.join(", "),
        MAIN_ALIAS,
        quoted("id"),
        table.placeholder("id", n),
        MAIN_ALIAS
    );
    q
}

/// DELETE one row by id; returns the deleted row, if any.
pub fn delete(table: &Table, id: &str) -> QueryBuf {
    let mut q = QueryBuf::default();
    let n = q.push_param(BindValue::from(id));
    q.sql = format!(
        "DELETE FROM {} AS {} WHERE {}.{} = {} RETURNING to_jsonb({}) AS row",
        quoted(table.name),
        MAIN_ALIAS,
        MAIN_ALIAS,
        quoted("id"),
        table.placeholder("id", n),
        MAIN_ALIAS
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION_NAME: Include = Include {
        name: "location",
        direction: IncludeDirection::ToOne,
        related: &LOCATIONS,
        our_key: "location_id",
        their_key: "id",
        columns: &["name"],
    };

    const ALL_MEDIA: Include = Include {
        name: "media",
        direction: IncludeDirection::ToMany,
        related: &MEDIA,
        our_key: "id",
        their_key: "property_id",
        columns: &[],
    };

    #[test]
    fn select_with_includes_filters_and_limit() {
        let q = select(
            &PROPERTIES,
            &[LOCATION_NAME, ALL_MEDIA],
            &[
                Filter::Eq("location_id", BindValue::from("loc")),
                Filter::NotEq("id", BindValue::from("me")),
            ],
            None,
            Some(3),
        );
        assert_eq!(
            q.sql,
            "SELECT to_jsonb(main) || jsonb_build_object(\
             'location', (SELECT to_jsonb(sub) FROM (SELECT \"name\" FROM \"locations\" WHERE \"id\" = main.\"location_id\" LIMIT 1) sub), \
             'media', (SELECT COALESCE(jsonb_agg(to_jsonb(sub)), '[]'::jsonb) FROM (SELECT * FROM \"media\" WHERE \"property_id\" = main.\"id\") sub)) \
             AS row FROM \"properties\" main WHERE main.\"location_id\" = $1::uuid AND main.\"id\" <> $2::uuid LIMIT 3"
        );
        assert_eq!(q.params, vec![BindValue::from("loc"), BindValue::from("me")]);
    }

    #[test]
    fn select_plain_ordered() {
        let q = select(&LOCATIONS, &[], &[], Some(Order::asc("name")), None);
        assert_eq!(
            q.sql,
            "SELECT to_jsonb(main) AS row FROM \"locations\" main ORDER BY main.\"name\" ASC"
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_casts_typed_columns() {
        let q = insert(
            &PROPERTIES,
            &[("title", BindValue::from("Plot")), ("price", BindValue::from(10.0))],
        );
        assert_eq!(
            q.sql,
            "INSERT INTO \"properties\" AS main (\"title\", \"price\") VALUES ($1, $2::numeric) RETURNING to_jsonb(main) AS row"
        );
    }

    #[test]
    fn update_binds_id_last() {
        let q = update(&PROPERTIES, "abc", &[("title", BindValue::from("New"))]);
        assert_eq!(
            q.sql,
            "UPDATE \"properties\" AS main SET \"title\" = $1 WHERE main.\"id\" = $2::uuid RETURNING to_jsonb(main) AS row"
        );
        assert_eq!(q.params[1], BindValue::from("abc"));
    }

    #[test]
    fn delete_by_id() {
        let q = delete(&MEDIA, "m1");
        assert_eq!(
            q.sql,
            "DELETE FROM \"media\" AS main WHERE main.\"id\" = $1::uuid RETURNING to_jsonb(main) AS row"
        );
    }
}
