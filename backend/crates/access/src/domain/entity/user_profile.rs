//! User Profile Entity
//!
//! The authenticated user's profile as issued by the backend and kept in the
//! session cookie.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier (Mongo-style backends send `_id`)
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}
