//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations of the gateway:
//! - Cookie header building and parsing
//! - HMAC-SHA256 signing and base64url helpers

pub mod cookie;
pub mod crypto;
