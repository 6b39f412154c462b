use serde::{Deserialize, Serialize};
use std::fmt;

/// The authorization level of an identity.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// How someone travels. Views branch their rendering on this tag, and the
/// profile store keys its preference shape off the same three values.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Business,
    Leisure,
    Bleisure,
}

impl TravelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Business => "business",
            TravelType::Leisure => "leisure",
            TravelType::Bleisure => "bleisure",
        }
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated Voyago user. Never carries password material.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The user's unique identifier.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's authorization level.
    pub role: Role,
    /// The user's travel-type tag, if one was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_type: Option<TravelType>,
}

/// A compiled-in demo account. The password only ever lives in this table;
/// the [`Identity`] handed to callers is built without it.
pub(crate) struct DemoAccount {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub travel_type: Option<TravelType>,
}

impl DemoAccount {
    pub(crate) fn identity(&self) -> Identity {
        Identity {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
            travel_type: self.travel_type,
        }
    }
}

/// The fixed allow-list the login operation matches against.
pub(crate) static DEMO_ACCOUNTS: [DemoAccount; 4] = [
    DemoAccount {
        id: "usr-demo-business",
        name: "Ava Chen",
        email: "business@voyago.travel",
        password: "business123",
        role: Role::User,
        travel_type: Some(TravelType::Business),
    },
    DemoAccount {
        id: "usr-demo-leisure",
        name: "Liam Park",
        email: "leisure@voyago.travel",
        password: "leisure123",
        role: Role::User,
        travel_type: Some(TravelType::Leisure),
    },
    DemoAccount {
        id: "usr-demo-bleisure",
        name: "Maya Rossi",
        email: "bleisure@voyago.travel",
        password: "bleisure123",
        role: Role::User,
        travel_type: Some(TravelType::Bleisure),
    },
    DemoAccount {
        id: "usr-demo-admin",
        name: "Noah Adler",
        email: "admin@voyago.travel",
        password: "admin123",
        role: Role::Admin,
        travel_type: None,
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_identity_serializes_camel_case_without_password() {
        let identity = DEMO_ACCOUNTS[0].identity();
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["travelType"], "business");
        assert_eq!(value["role"], "user");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_admin_has_no_travel_type_key() {
        let identity = DEMO_ACCOUNTS[3].identity();
        let value = serde_json::to_value(&identity).unwrap();
        assert!(value.get("travelType").is_none());
    }
}
