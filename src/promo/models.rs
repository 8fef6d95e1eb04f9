use std::io::Write;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
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

use crate::schema::promo_codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum PromoType {
    Percentage,
    Fixed,
}

impl PromoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoType::Percentage => "percentage",
            PromoType::Fixed => "fixed",
        }
    }
}

impl ToSql<Text, Pg> for PromoType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for PromoType {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        match value.as_bytes() {
            b"percentage" => Ok(PromoType::Percentage),
            b"fixed" => Ok(PromoType::Fixed),
            other => Err(format!(
                "unrecognized promo type: {}",
                String::from_utf8_lossy(other)
            )
            .into()),
        }
    }
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = promo_codes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: i32,
    pub code: String,
    pub amount: BigDecimal,
    pub promo_type: PromoType,
    pub is_active: bool,
    pub used_count: i32,
    pub expires_on: NaiveDate,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = promo_codes)]
#[serde(rename_all = "camelCase")]
pub struct NewPromoCode {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    pub amount: BigDecimal,
    pub promo_type: PromoType,
    pub is_active: Option<bool>,
    pub expires_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promo_type_round_trips_through_serde() {
        for (ty, text) in [
            (PromoType::Percentage, "\"percentage\""),
            (PromoType::Fixed, "\"fixed\""),
        ] {
            assert_eq!(serde_json::to_string(&ty).unwrap(), text);
            assert_eq!(serde_json::from_str::<PromoType>(text).unwrap(), ty);
        }
    }

    #[test]
    fn unknown_promo_type_is_rejected() {
        let raw = r#"{
            "code": "WELCOME10",
            "amount": 10,
            "promoType": "bogus",
            "expiresOn": "2026-12-31"
        }"#;
        assert!(serde_json::from_str::<NewPromoCode>(raw).is_err());
    }

    #[test]
    fn empty_code_fails_validation() {
        let raw = r#"{
            "code": "",
            "amount": 10,
            "promoType": "fixed",
            "expiresOn": "2026-12-31"
        }"#;
        let payload: NewPromoCode = serde_json::from_str(raw).unwrap();
        assert!(payload.validate().is_err());
    }
}
