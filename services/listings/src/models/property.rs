//! Property models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::money::Cents;

/// Every `properties` column, qualified, in declaration order.
///
/// A macro rather than a const so it can be spliced into `concat!`.
macro_rules! property_columns {
    () => {
        "properties.id, properties.owner_id, properties.title, properties.description, \
         properties.thumbnail_photo_url, properties.cover_photo_url, properties.cost_per_night, \
         properties.parking_spaces, properties.number_of_bathrooms, properties.number_of_bedrooms, \
         properties.country, properties.street, properties.city, properties.province, \
         properties.post_code, properties.active"
    };
}
pub(crate) use property_columns;

/// Property entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property row joined with the average of its review ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyWithRating {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// New property creation payload
///
/// `cost_per_night` is in major units (dollars); it is stored in cents.
/// New properties are always inserted as active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: f64,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl NewProperty {
    pub fn cost_per_night_cents(&self) -> Cents {
        Cents::from_major(self.cost_per_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_per_night_is_converted_to_cents() {
        let property = NewProperty {
            owner_id: 1,
            title: "Speed lamp".to_string(),
            description: None,
            thumbnail_photo_url: "https://example.com/thumb.jpg".to_string(),
            cover_photo_url: "https://example.com/cover.jpg".to_string(),
            cost_per_night: 120.00,
            parking_spaces: 1,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
            country: "Canada".to_string(),
            street: "536 Namsub Highway".to_string(),
            city: "Sotboske".to_string(),
            province: "Quebec".to_string(),
            post_code: "28142".to_string(),
        };

        assert_eq!(property.cost_per_night_cents(), Cents::new(12000));
    }

    #[test]
    fn test_rated_property_serializes_flat() {
        let rated = PropertyWithRating {
            property: Property {
                id: 4,
                owner_id: 2,
                title: "Headed know".to_string(),
                description: Some("description".to_string()),
                thumbnail_photo_url: "t".to_string(),
                cover_photo_url: "c".to_string(),
                cost_per_night: Cents::new(8500),
                parking_spaces: 0,
                number_of_bathrooms: 1,
                number_of_bedrooms: 1,
                country: "Canada".to_string(),
                street: "1 Main St".to_string(),
                city: "Vancouver".to_string(),
                province: "British Columbia".to_string(),
                post_code: "V5K".to_string(),
                active: true,
            },
            average_rating: Some(4.25),
        };

        let json = serde_json::to_value(&rated).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["cost_per_night"], 8500);
        assert_eq!(json["average_rating"], 4.25);
    }
}
