//! SQL construction for listing queries.
//!
//! Every client-supplied value travels as a `?` bind parameter. The only
//! strings concatenated into SQL text are the resolved table name and
//! column/direction names taken from the closed enums in
//! [`fes_core::listing`].

use fes_core::listing::{ListingQuery, NO_AWARD, NO_CONTEST, NO_FAMER};
use fes_core::types::DbId;
use sqlx::mysql::MySqlArguments;
use sqlx::MySql;

// ---------------------------------------------------------------------------
// Assembled query
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built listing queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

/// SQL text and its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

impl SqlQuery {
    fn new(sql: String) -> Self {
        Self {
            sql,
            binds: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter precedence
// ---------------------------------------------------------------------------

/// Pick the single WHERE condition for a game listing query.
///
/// First match wins: keyword filter, then contest, then award, then famer.
/// Later filters are ignored even when set; conditions are never combined.
///
/// Returns `(clause, bind_values)`. The clause has no `WHERE ` prefix and is
/// empty when no filter applies.
pub fn build_listing_filter(query: &ListingQuery) -> (String, Vec<BindValue>) {
    if let Some(filter) = &query.filter {
        let column = filter.column.as_sql();
        let clause = if filter.column.is_exact_match() {
            format!("{column} = ?")
        } else {
            format!("{column} LIKE CONCAT('%', ?, '%')")
        };
        return (clause, vec![BindValue::Text(filter.keyword.clone())]);
    }

    if query.contest != NO_CONTEST {
        return ("contest = ?".to_string(), vec![BindValue::Int(query.contest)]);
    }

    if query.award != NO_AWARD {
        return ("award = ?".to_string(), vec![BindValue::Int(query.award)]);
    }

    if query.famer != NO_FAMER {
        return ("famer = ?".to_string(), vec![BindValue::Int(query.famer)]);
    }

    (String::new(), Vec::new())
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the full game listing query against `table`.
pub fn assemble_game_query(table: &str, query: &ListingQuery) -> SqlQuery {
    let (clause, binds) = build_listing_filter(query);
    let mut assembled = SqlQuery {
        sql: format!("SELECT * FROM {table}"),
        binds,
    };

    if !clause.is_empty() {
        assembled.sql.push_str(" WHERE ");
        assembled.sql.push_str(&clause);
    }

    if let Some(sort) = query.sort {
        assembled.sql.push_str(&format!(
            " ORDER BY {} {}",
            sort.column.as_sql(),
            sort.direction.as_sql()
        ));
    }

    // OFFSET is only emitted under a LIMIT; a bare offset is dropped.
    if query.page.count > 0 {
        assembled.sql.push_str(" LIMIT ?");
        assembled.binds.push(BindValue::Int(query.page.count));

        if query.page.offset > 0 {
            assembled.sql.push_str(" OFFSET ?");
            assembled.binds.push(BindValue::Int(query.page.offset));
        }
    }

    assembled
}

/// Contest listings are always returned in full.
pub fn contest_list_query(table: &str) -> SqlQuery {
    SqlQuery::new(format!("SELECT * FROM {table}"))
}

/// Count rows in `table` with the given game id.
pub fn exists_query(table: &str, sid: DbId) -> SqlQuery {
    SqlQuery {
        sql: format!("SELECT COUNT(*) FROM {table} WHERE sid = ?"),
        binds: vec![BindValue::Int(sid)],
    }
}

// ---------------------------------------------------------------------------
// Binding helpers
// ---------------------------------------------------------------------------

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, MySql, O, MySqlArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, MySql, O, MySqlArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, MySql, i64, MySqlArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, MySql, i64, MySqlArguments> {
    for val in bind_values {
        match val {
            BindValue::Int(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
