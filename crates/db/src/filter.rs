//! Composable predicate builder for filtered list queries.
//!
//! Every entity repository builds its `WHERE` clause from a [`Conditions`]
//! value: each present filter field contributes exactly one predicate,
//! ANDed with the rest, and a typed [`BindValue`] for the matching `$n`
//! placeholder. The same conditions drive both the page query and the
//! total-count query so `count` always reflects the filter, not the page.
//!
//! The builder is pure string/value assembly and is unit-tested without a
//! database.

use pressroom_core::error::CoreError;
use pressroom_core::types::{DbId, Timestamp};
use pressroom_core::validation::{parse_sort_direction, SortDirection};
use serde::Serialize;

/// Typed bind value for dynamically-built queries.
#[derive(Debug, Clone)]
pub enum BindValue {
    Id(DbId),
    IdList(Vec<DbId>),
    Text(String),
    Bool(bool),
    Timestamp(Timestamp),
}

/// Accumulates `WHERE` predicates and their bind values.
///
/// Placeholders are numbered from `$1`; call [`Conditions::next_index`]
/// after building to find the index for trailing LIMIT/OFFSET binds.
#[derive(Debug, Default)]
pub struct Conditions {
    clauses: Vec<String>,
    values: Vec<BindValue>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate with no bind value (e.g. the soft-delete scope).
    pub fn raw(&mut self, clause: &str) {
        self.clauses.push(clause.to_string());
    }

    /// Add a predicate whose SQL depends on the placeholder index.
    ///
    /// `make_clause` receives the `$n` index assigned to `value`. This is
    /// the escape hatch for predicates the named helpers below do not
    /// cover (e.g. an `EXISTS` subquery against a join table).
    pub fn push_with(&mut self, value: BindValue, make_clause: impl FnOnce(u32) -> String) {
        let idx = self.next_index();
        self.clauses.push(make_clause(idx));
        self.values.push(value);
    }

    /// `column = $n` against a UUID.
    pub fn eq_id(&mut self, column: &str, id: DbId) {
        self.push_with(BindValue::Id(id), |idx| format!("{column} = ${idx}"));
    }

    /// `column = ANY($n)` against a UUID list (pipe-delimited FK filters).
    pub fn id_in(&mut self, column: &str, ids: Vec<DbId>) {
        self.push_with(BindValue::IdList(ids), |idx| {
            format!("{column} = ANY(${idx})")
        });
    }

    /// Case-insensitive substring match: `column ILIKE '%needle%'`.
    pub fn contains(&mut self, column: &str, needle: &str) {
        self.push_with(BindValue::Text(format!("%{needle}%")), |idx| {
            format!("{column} ILIKE ${idx}")
        });
    }

    /// `column = $n` against a boolean flag.
    pub fn eq_bool(&mut self, column: &str, value: bool) {
        self.push_with(BindValue::Bool(value), |idx| format!("{column} = ${idx}"));
    }

    /// Inclusive lower bound: `column >= $n`.
    pub fn gte(&mut self, column: &str, value: Timestamp) {
        self.push_with(BindValue::Timestamp(value), |idx| {
            format!("{column} >= ${idx}")
        });
    }

    /// Inclusive upper bound: `column <= $n`.
    pub fn lte(&mut self, column: &str, value: Timestamp) {
        self.push_with(BindValue::Timestamp(value), |idx| {
            format!("{column} <= ${idx}")
        });
    }

    /// The `WHERE …` fragment, or an empty string when no predicates exist.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// The placeholder index the next bind value would receive.
    pub fn next_index(&self) -> u32 {
        self.values.len() as u32 + 1
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }
}

/// Bind accumulated values to a sqlx `QueryAs` in declaration order.
pub fn bind_conditions<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::Id(v) => q = q.bind(*v),
            BindValue::IdList(v) => q = q.bind(v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind accumulated values to a sqlx `QueryScalar` (count queries).
pub fn bind_conditions_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::Id(v) => q = q.bind(*v),
            BindValue::IdList(v) => q = q.bind(v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Ordering and pagination
// ---------------------------------------------------------------------------

/// A validated sort column and direction.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn order_by_sql(&self) -> String {
        format!("ORDER BY {} {}", self.column, self.direction.as_sql())
    }
}

/// Resolve the requested sort against a per-entity column whitelist.
///
/// A custom order applies only when both `field` and `sort` are present
/// (matching the source contract); otherwise the default is
/// `created_at DESC`. An unknown column or direction is a validation
/// error, never a silent fallback.
pub fn resolve_sort(
    field: Option<&str>,
    sort: Option<&str>,
    allowed: &'static [&'static str],
) -> Result<SortSpec, CoreError> {
    let (Some(field), Some(sort)) = (field, sort) else {
        return Ok(SortSpec {
            column: "created_at",
            direction: SortDirection::Desc,
        });
    };

    let column = allowed
        .iter()
        .find(|col| **col == field)
        .copied()
        .ok_or_else(|| CoreError::Validation(format!("'{field}' is not a sortable field")))?;

    Ok(SortSpec {
        column,
        direction: parse_sort_direction(sort)?,
    })
}

/// Compute `(limit, offset)` from 0-based `page` and `limit` params.
///
/// No limit (absent or zero) means no LIMIT/OFFSET at all; `page` is only
/// meaningful together with a limit (`offset = page * limit`).
pub fn page_bounds(
    page: Option<i64>,
    limit: Option<i64>,
) -> Result<Option<(i64, i64)>, CoreError> {
    if page.is_some_and(|p| p < 0) {
        return Err(CoreError::Validation("page must not be negative".into()));
    }
    match limit {
        None | Some(0) => Ok(None),
        Some(l) if l < 0 => Err(CoreError::Validation("limit must not be negative".into())),
        Some(l) => {
            // page and limit come straight from query params; the product
            // must not wrap into a negative OFFSET.
            let offset = page
                .unwrap_or(0)
                .checked_mul(l)
                .ok_or_else(|| CoreError::Validation("page is out of range".into()))?;
            Ok(Some((l, offset)))
        }
    }
}

/// A page of rows plus the total count matching the filter.
#[derive(Debug, Serialize)]
pub struct RowsAndCount<T> {
    pub rows: Vec<T>,
    pub count: i64,
}
