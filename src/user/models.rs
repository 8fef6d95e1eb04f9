use std::io::Write;

use chrono::NaiveDateTime;
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

use crate::schema::users;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow, Default,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Renter,
    Seller,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Renter => "renter",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

impl ToSql<Text, Pg> for Role {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for Role {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        match value.as_bytes() {
            b"renter" => Ok(Role::Renter),
            b"seller" => Ok(Role::Seller),
            b"admin" => Ok(Role::Admin),
            other => Err(format!("unrecognized role: {}", String::from_utf8_lossy(other)).into()),
        }
    }
}

#[derive(Queryable, Selectable, Debug, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub student_verified: bool,
    pub created_at: NaiveDateTime,
}

/// Password-less representation returned to clients.
#[derive(Queryable, Selectable, Debug, PartialEq, Clone, Serialize, Deserialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub student_verified: bool,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPayload {
    #[validate(length(min = 1, message = "fullName is required"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub role: Option<Role>,
    pub student_verified: Option<bool>,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Option<Role>,
    pub student_verified: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_serde() {
        for (role, text) in [
            (Role::Renter, "\"renter\""),
            (Role::Seller, "\"seller\""),
            (Role::Admin, "\"admin\""),
        ] {
            assert_eq!(serde_json::to_string(&role).unwrap(), text);
            assert_eq!(serde_json::from_str::<Role>(text).unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_text_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"moderator\"").is_err());
    }

    #[test]
    fn payload_missing_full_name_fails_validation() {
        let payload = NewUserPayload {
            full_name: String::new(),
            email: "bea@example.com".to_owned(),
            password: "hunter2hunter2".to_owned(),
            role: None,
            student_verified: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn payload_missing_email_fails_deserialization() {
        let raw = r#"{"fullName": "Bea", "password": "hunter2hunter2"}"#;
        assert!(serde_json::from_str::<NewUserPayload>(raw).is_err());
    }
}
