//! Domain DTOs for the user service.
//!
//! # Design
//! `User` mirrors only the fields the card needs. The service returns many
//! more (age, address, company, ...) and serde drops them. The mock-server
//! crate defines its own copy of the schema; integration tests catch drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One user record as returned by `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: String,
}

/// Opaque key identifying a user on the remote service.
///
/// Not validated locally; the service decides what a valid id is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_reads_camel_case_and_ignores_extra_fields() {
        let json = r#"{
            "id": 2,
            "firstName": "Jane",
            "lastName": "Doe",
            "maidenName": "Smith",
            "age": 28,
            "email": "jane@x.com",
            "image": "http://x/img.png"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email, "jane@x.com");
        assert_eq!(user.image, "http://x/img.png");
    }

    #[test]
    fn user_rejects_missing_field() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":2,"firstName":"Jane","lastName":"Doe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_serializes_camel_case() {
        let user = User {
            id: 7,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.c".to_string(),
            image: "i".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["lastName"], "B");
    }

    #[test]
    fn user_id_from_number_and_text() {
        assert_eq!(UserId::from(2).as_str(), "2");
        assert_eq!("abc".parse::<UserId>().unwrap().to_string(), "abc");
    }
}
