use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::rentals;

#[derive(Queryable, Selectable, Debug, PartialEq, Clone, Identifiable)]
#[diesel(table_name = rentals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Rental {
    pub id: i32,
    pub product_id: i32,
    pub renter_id: i32,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub total: f64,
}

/// A rental joined with the title of the product it was booked against,
/// as shown in the dashboard history tab.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecord {
    pub id: i32,
    pub product_id: i32,
    pub product_title: String,
    pub renter_id: i32,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub total: f64,
}

impl RentalRecord {
    pub fn from_parts(rental: Rental, product_title: String) -> Self {
        Self {
            id: rental.id,
            product_id: rental.product_id,
            product_title,
            renter_id: rental.renter_id,
            started_on: rental.started_on,
            ended_on: rental.ended_on,
            total: rental.total,
        }
    }
}
