use std::io::Write;

use diesel::{
    AsExpression, FromSqlRow,
    deserialize::{self, FromSql},
    pg::{Pg, PgValue},
    prelude::*,
    serialize::{self, IsNull, Output, ToSql},
    sql_types::Text,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::products;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow, Default,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Inactive => "inactive",
            ListingStatus::Pending => "pending",
        }
    }
}

impl ToSql<Text, Pg> for ListingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for ListingStatus {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        match value.as_bytes() {
            b"active" => Ok(ListingStatus::Active),
            b"inactive" => Ok(ListingStatus::Inactive),
            b"pending" => Ok(ListingStatus::Pending),
            other => Err(format!(
                "unrecognized listing status: {}",
                String::from_utf8_lossy(other)
            )
            .into()),
        }
    }
}

#[derive(
    Queryable, Selectable, Debug, PartialEq, Clone, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub category: String,
    pub rating: f64,
    pub review_count: i32,
    pub review_snippet: String,
    pub image: String,
    pub badges: Vec<String>,
    pub status: ListingStatus,
    pub seller_id: Option<i32>,
}

/// Omitted optional columns fall back to their database defaults.
#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = products)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(range(min = 0.01, message = "price must be positive"))]
    pub price: f64,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    pub badges: Option<Vec<String>>,
    pub status: Option<ListingStatus>,
    pub seller_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_status_round_trips_through_serde() {
        for (status, text) in [
            (ListingStatus::Active, "\"active\""),
            (ListingStatus::Inactive, "\"inactive\""),
            (ListingStatus::Pending, "\"pending\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), text);
            assert_eq!(serde_json::from_str::<ListingStatus>(text).unwrap(), status);
        }
    }

    #[test]
    fn unknown_listing_status_is_rejected() {
        assert!(serde_json::from_str::<ListingStatus>("\"archived\"").is_err());
    }

    #[test]
    fn payload_without_title_fails_deserialization() {
        let raw = r#"{"price": 12.5, "image": "https://cdn.example.com/a.jpg"}"#;
        assert!(serde_json::from_str::<NewProduct>(raw).is_err());
    }

    #[test]
    fn payload_without_image_fails_deserialization() {
        let raw = r#"{"title": "Canon EOS R6", "price": 45.0}"#;
        assert!(serde_json::from_str::<NewProduct>(raw).is_err());
    }

    #[test]
    fn payload_with_zero_price_fails_validation() {
        let raw = r#"{"title": "Canon EOS R6", "price": 0.0, "image": "r6.jpg"}"#;
        let payload: NewProduct = serde_json::from_str(raw).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn full_payload_preserves_fields_exactly() {
        let raw = r#"{
            "title": "Canon EOS R6",
            "price": 45.0,
            "description": "Full-frame mirrorless, two batteries included",
            "location": "West Lafayette",
            "category": "Cameras",
            "image": "https://cdn.example.com/r6.jpg",
            "badges": ["Top Rated", "Insured"],
            "status": "pending",
            "sellerId": 7
        }"#;

        let payload: NewProduct = serde_json::from_str(raw).unwrap();
        payload.validate().unwrap();

        assert_eq!(payload.title, "Canon EOS R6");
        assert_eq!(payload.price, 45.0);
        assert_eq!(payload.description.as_deref(), Some("Full-frame mirrorless, two batteries included"));
        assert_eq!(payload.location.as_deref(), Some("West Lafayette"));
        assert_eq!(payload.category.as_deref(), Some("Cameras"));
        assert_eq!(payload.image, "https://cdn.example.com/r6.jpg");
        assert_eq!(
            payload.badges,
            Some(vec!["Top Rated".to_owned(), "Insured".to_owned()])
        );
        assert_eq!(payload.status, Some(ListingStatus::Pending));
        assert_eq!(payload.seller_id, Some(7));
    }
}
