use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::deals;

/// Promotional campaign rows. Created by the seed binary only; nothing
/// mutates them after insert.
#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = deals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub discount: BigDecimal,
    pub image: String,
    pub badge: String,
    pub is_active: bool,
    pub ends_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = deals)]
pub struct NewDeal {
    pub title: String,
    pub description: String,
    pub discount: BigDecimal,
    pub image: String,
    pub badge: String,
    pub is_active: Option<bool>,
    pub ends_at: NaiveDateTime,
}
