//! Reservation models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, postgres::PgRow};

use super::Property;

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A guest's reservation together with the reserved property and its
/// average review rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationWithProperty {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}

// Property columns keep their own names; reservation columns are read back
// under the `reservation_` aliases chosen by the listing query.
impl<'r> FromRow<'r, PgRow> for ReservationWithProperty {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let property = Property::from_row(row)?;

        let reservation = Reservation {
            id: row.try_get("reservation_id")?,
            guest_id: row.try_get("reservation_guest_id")?,
            property_id: property.id,
            start_date: row.try_get("reservation_start_date")?,
            end_date: row.try_get("reservation_end_date")?,
        };

        Ok(Self {
            reservation,
            property,
            average_rating: row.try_get("average_rating")?,
        })
    }
}
