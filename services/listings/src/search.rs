//! Filtered property search
//!
//! [`build_property_search`] turns a [`PropertyFilters`] record into one
//! parameterized statement. Predicates are collected first and joined with
//! `AND` afterwards, so the statement carries at most one `WHERE` however
//! many filters are set. Every placeholder is numbered at the moment its
//! parameter is pushed, which keeps `$n` in step with bind order.

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, postgres::PgArguments, query::QueryAs};

use crate::models::{PropertyWithRating, property::property_columns};
use crate::money::Cents;

/// Row cap applied when a caller has no preference
pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_RATED_PROPERTIES: &str = concat!(
    "SELECT ",
    property_columns!(),
    ", avg(property_reviews.rating)::float8 AS average_rating\n",
    "FROM properties\n",
    "JOIN property_reviews ON properties.id = property_reviews.property_id"
);

/// Optional search criteria. Prices are in major units (dollars).
///
/// Non-finite numbers (NaN, infinities) count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilters {
    /// Case-insensitive substring of the city name; empty means unset
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
}

/// A ready-to-run search statement and its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl PropertySearch {
    /// Prepare the statement with every parameter bound in order.
    pub fn query(&self) -> QueryAs<'_, Postgres, PropertyWithRating, PgArguments> {
        self.params
            .iter()
            .fold(sqlx::query_as(&self.sql), |query, param| match param {
                SqlParam::Text(value) => query.bind(value.clone()),
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::BigInt(value) => query.bind(*value),
                SqlParam::Float(value) => query.bind(*value),
            })
    }
}

#[derive(Default)]
struct Params(Vec<SqlParam>);

impl Params {
    /// Push `param` and return its placeholder.
    fn bind(&mut self, param: SqlParam) -> String {
        self.0.push(param);
        format!("${}", self.0.len())
    }
}

/// Build the search statement for `filters`, capped at `limit` rows.
///
/// Without a rating filter the rows come back cheapest first. With one, a
/// `HAVING` clause on the average rating replaces the price ordering.
pub fn build_property_search(filters: &PropertyFilters, limit: i64) -> PropertySearch {
    let mut params = Params::default();
    let mut predicates = Vec::new();

    if let Some(city) = filters.city.as_deref().filter(|city| !city.is_empty()) {
        let p = params.bind(SqlParam::Text(format!("%{}%", city)));
        predicates.push(format!("properties.city ILIKE {}", p));
    }

    if let Some(owner_id) = filters.owner_id {
        let p = params.bind(SqlParam::Int(owner_id));
        predicates.push(format!("properties.owner_id = {}", p));
    }

    if let Some(minimum) = finite(filters.minimum_price_per_night) {
        let p = params.bind(SqlParam::Int(Cents::from_major(minimum).get()));
        predicates.push(format!("properties.cost_per_night >= {}", p));
    }

    if let Some(maximum) = finite(filters.maximum_price_per_night) {
        let p = params.bind(SqlParam::Int(Cents::from_major(maximum).get()));
        predicates.push(format!("properties.cost_per_night <= {}", p));
    }

    let mut sql = String::from(SELECT_RATED_PROPERTIES);

    if !predicates.is_empty() {
        sql.push_str("\nWHERE ");
        sql.push_str(&predicates.join("\nAND "));
    }

    sql.push_str("\nGROUP BY properties.id");

    match finite(filters.minimum_rating) {
        Some(rating) => {
            let p = params.bind(SqlParam::Float(rating));
            sql.push_str(&format!("\nHAVING avg(property_reviews.rating) >= {}", p));
        }
        None => sql.push_str("\nORDER BY properties.cost_per_night ASC"),
    }

    let p = params.bind(SqlParam::BigInt(limit));
    sql.push_str(&format!("\nLIMIT {}", p));

    PropertySearch {
        sql,
        params: params.0,
    }
}
