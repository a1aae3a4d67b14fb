//! # Filters
//!
//! Row filters rendered in the backend's PostgREST query syntax:
//!
//! ```text
//! owner_id=eq.7f3c...              equality
//! vehicle_plate=in.(LD3587IA)      membership
//! or=(plate.ilike.*35*,model...)   disjunction
//! order=created_at.desc            ordering
//! ```
//!
//! Rendering stops at the query-string level; URL encoding is the HTTP
//! client's job.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Comparison operators used by registry queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Op {
    /// Exact equality.
    Eq,
    /// Case-insensitive pattern match (`*` is the wildcard).
    Ilike,
}

impl Op {
    /// PostgREST operator keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ilike => "ilike",
        }
    }
}

/// A single row filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Filter {
    /// `column <op> value`
    Compare {
        /// Column name.
        column: String,
        /// Operator.
        op: Op,
        /// Right-hand value, unquoted.
        value: String,
    },
    /// `column IN (values...)`; an empty list matches no rows.
    In {
        /// Column name.
        column: String,
        /// Accepted values, unquoted.
        values: Vec<String>,
    },
    /// Any of the nested filters.
    Or(Vec<Filter>),
}

impl Filter {
    /// `column = value`
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Compare {
            column: column.into(),
            op: Op::Eq,
            value: value.into(),
        }
    }

    /// `column ILIKE '*term*'`
    ///
    /// Wildcards in `term` are dropped, so the pattern only ever matches
    /// `term` as a literal substring.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_query::Filter;
    ///
    /// assert_eq!(Filter::contains("brand", "to*y%").to_string(), "brand=ilike.*toy*");
    /// ```
    pub fn contains(column: impl Into<String>, term: &str) -> Self {
        Filter::Compare {
            column: column.into(),
            op: Op::Ilike,
            value: format!("*{}*", strip_wildcards(term)),
        }
    }

    /// `column IN (values...)`
    pub fn is_in<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Render as a `(key, value)` query-string pair.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_query::Filter;
    ///
    /// let pair = Filter::eq("owner_id", "u-1").to_query_pair();
    /// assert_eq!(pair, ("owner_id".to_string(), "eq.u-1".to_string()));
    ///
    /// let either = Filter::Or(vec![
    ///     Filter::eq("vehicle_plate", "LD3587IA"),
    ///     Filter::eq("driver_license", "LA-12345"),
    /// ]);
    /// assert_eq!(either.to_string(), "or=(vehicle_plate.eq.LD3587IA,driver_license.eq.LA-12345)");
    /// ```
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Compare { column, op, value } => {
                (column.clone(), format!("{}.{}", op.as_str(), quote(value)))
            }
            Filter::In { column, values } => (column.clone(), format!("in.({})", list(values))),
            Filter::Or(filters) => ("or".to_string(), format!("({})", conditions(filters))),
        }
    }

    /// Render as a condition nested inside a logical operator,
    /// e.g. `plate.eq.LD3587IA`.
    fn condition(&self) -> String {
        match self {
            Filter::Compare { column, op, value } => {
                format!("{column}.{}.{}", op.as_str(), quote(value))
            }
            Filter::In { column, values } => format!("{column}.in.({})", list(values)),
            Filter::Or(filters) => format!("or({})", conditions(filters)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.to_query_pair();
        write!(f, "{key}={value}")
    }
}

/// Sort order of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// Column to sort by.
    pub column: String,
    /// Sort largest first.
    pub descending: bool,
}

impl Order {
    /// Ascending on `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        Order {
            column: column.into(),
            descending: false,
        }
    }

    /// Descending on `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        Order {
            column: column.into(),
            descending: true,
        }
    }

    /// Most recently created rows first.
    pub fn newest_first() -> Self {
        Order::desc("created_at")
    }

    /// Render as the `order` query-string pair.
    ///
    /// # Example
    ///
    /// ```
    /// use viangola_query::Order;
    ///
    /// assert_eq!(
    ///     Order::newest_first().to_query_pair(),
    ///     ("order".to_string(), "created_at.desc".to_string())
    /// );
    /// assert_eq!(Order::asc("name").to_string(), "order=name.asc");
    /// ```
    pub fn to_query_pair(&self) -> (String, String) {
        let direction = if self.descending { "desc" } else { "asc" };
        ("order".to_string(), format!("{}.{direction}", self.column))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.to_query_pair();
        write!(f, "{key}={value}")
    }
}

/// Remove the `ilike` wildcards (`*`, and `%` as the backend also reads it).
pub(crate) fn strip_wildcards(term: &str) -> String {
    term.chars().filter(|c| !matches!(c, '*' | '%')).collect()
}

fn conditions(filters: &[Filter]) -> String {
    filters.iter().map(Filter::condition).collect::<Vec<_>>().join(",")
}

fn list(values: &[String]) -> String {
    values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(",")
}

/// Double-quote values containing PostgREST's reserved characters.
fn quote(value: &str) -> String {
    const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\', ' '];
    if !value.contains(RESERVED) {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
