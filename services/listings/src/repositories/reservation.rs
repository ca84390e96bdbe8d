//! Reservation repository for database operations

use std::time::Duration;

use common::database::with_timeout;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;

use crate::models::{ReservationWithProperty, property::property_columns};

const SELECT_GUEST_RESERVATIONS: &str = concat!(
    "SELECT reservations.id AS reservation_id, reservations.guest_id AS reservation_guest_id, ",
    "reservations.start_date AS reservation_start_date, ",
    "reservations.end_date AS reservation_end_date, ",
    property_columns!(),
    ", avg(property_reviews.rating)::float8 AS average_rating\n",
    "FROM reservations\n",
    "JOIN properties ON properties.id = reservations.property_id\n",
    "JOIN property_reviews ON properties.id = property_reviews.property_id\n",
    "WHERE reservations.guest_id = $1\n",
    "GROUP BY reservations.id, properties.id\n",
    "ORDER BY reservations.start_date ASC\n",
    "LIMIT $2"
);

/// Reservation repository
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl ReservationRepository {
    /// Create a new reservation repository
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// List a guest's reservations, earliest start date first, at most `limit` rows
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> DatabaseResult<Vec<ReservationWithProperty>> {
        info!("Listing reservations for guest {} (limit {})", guest_id, limit);

        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, ReservationWithProperty>(SELECT_GUEST_RESERVATIONS)
                .bind(guest_id)
                .bind(limit)
                .fetch_all(&self.pool),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_columns_do_not_collide_with_property_columns() {
        let (projection, _) = SELECT_GUEST_RESERVATIONS
            .split_once("\nFROM")
            .expect("statement has a FROM clause");

        assert!(projection.starts_with("SELECT reservations.id AS reservation_id,"));
        assert!(!projection.contains("reservations.id,"));
        assert!(projection.contains("properties.id, properties.owner_id"));
    }

    #[test]
    fn test_reservations_grouped_by_reservation_and_property() {
        assert!(SELECT_GUEST_RESERVATIONS.contains("\nGROUP BY reservations.id, properties.id\n"));
    }

    #[test]
    fn test_reservations_ordered_and_capped() {
        assert!(SELECT_GUEST_RESERVATIONS.contains("ORDER BY reservations.start_date ASC"));
        assert!(SELECT_GUEST_RESERVATIONS.ends_with("LIMIT $2"));
    }
}
