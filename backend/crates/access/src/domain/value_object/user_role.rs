use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marketplace role.
///
/// Deserialization is strict: an unknown role string fails to parse, which
/// makes the whole stored session malformed instead of leaking an unchecked
/// role downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[display("customer")]
    Customer,
    #[display("host")]
    Host,
    #[display("admin")]
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Customer, UserRole::Host, UserRole::Admin];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Customer => "customer",
            Host => "host",
            Admin => "admin",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "customer" => Some(Customer),
            "host" => Some(Host),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
