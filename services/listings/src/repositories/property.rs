//! Property repository for database operations

use std::time::Duration;

use common::database::with_timeout;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::{NewProperty, Property, PropertyWithRating, property::property_columns};
use crate::search::{PropertyFilters, build_property_search};

const INSERT_PROPERTY: &str = concat!(
    "INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, cover_photo_url, ",
    "cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms, ",
    "country, street, city, province, post_code, active)\n",
    "VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, true)\n",
    "RETURNING ",
    property_columns!()
);

/// Property repository
#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PropertyRepository {
    /// Create a new property repository
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Search properties matching `filters`, at most `limit` rows
    pub async fn search(
        &self,
        filters: &PropertyFilters,
        limit: i64,
    ) -> DatabaseResult<Vec<PropertyWithRating>> {
        info!("Searching properties with {:?} (limit {})", filters, limit);

        let search = build_property_search(filters, limit);
        debug!(
            sql = %search.sql,
            params = search.params.len(),
            "Built property search"
        );

        with_timeout(self.query_timeout, search.query().fetch_all(&self.pool)).await
    }

    /// Insert a new active property and return the stored row
    pub async fn create(&self, new_property: &NewProperty) -> DatabaseResult<Property> {
        let cost_per_night = new_property.cost_per_night_cents();
        info!(
            "Creating property {:?} for owner {} at {} per night",
            new_property.title, new_property.owner_id, cost_per_night
        );

        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, Property>(INSERT_PROPERTY)
                .bind(new_property.owner_id)
                .bind(&new_property.title)
                .bind(&new_property.description)
                .bind(&new_property.thumbnail_photo_url)
                .bind(&new_property.cover_photo_url)
                .bind(cost_per_night)
                .bind(new_property.parking_spaces)
                .bind(new_property.number_of_bathrooms)
                .bind(new_property.number_of_bedrooms)
                .bind(&new_property.country)
                .bind(&new_property.street)
                .bind(&new_property.city)
                .bind(&new_property.province)
                .bind(&new_property.post_code)
                .fetch_one(&self.pool),
        )
        .await
    }
}
