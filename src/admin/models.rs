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

use crate::schema::admins;
use crate::user::models::Role;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow, Default,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Banned,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Banned => "banned",
        }
    }
}

impl ToSql<Text, Pg> for AccountStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for AccountStatus {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        match value.as_bytes() {
            b"active" => Ok(AccountStatus::Active),
            b"banned" => Ok(AccountStatus::Banned),
            other => Err(format!(
                "unrecognized account status: {}",
                String::from_utf8_lossy(other)
            )
            .into()),
        }
    }
}

#[derive(Queryable, Selectable, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[diesel(table_name = admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct SafeAdmin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub rating: f64,
    pub student_verified: bool,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub status: Option<AccountStatus>,
    pub rating: Option<f64>,
}

#[derive(Insertable)]
#[diesel(table_name = admins)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub status: Option<AccountStatus>,
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_serde() {
        for (status, text) in [
            (AccountStatus::Active, "\"active\""),
            (AccountStatus::Banned, "\"banned\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), text);
            assert_eq!(serde_json::from_str::<AccountStatus>(text).unwrap(), status);
        }
    }

    #[test]
    fn payload_missing_name_fails_validation() {
        let payload = NewAdminPayload {
            name: String::new(),
            email: "ops@example.com".to_owned(),
            password: "hunter2hunter2".to_owned(),
            status: None,
            rating: None,
        };
        assert!(payload.validate().is_err());
    }
}
