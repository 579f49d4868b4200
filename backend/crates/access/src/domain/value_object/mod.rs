//! Value Object Module

pub mod auth_token;
pub mod user_role;
