//! Cookie-backed Session Store
//!
//! The single canonical session store. The profile lives in a signed,
//! HttpOnly `user_data` cookie so the edge guard can trust the role; the
//! bearer token lives next to it in `token`.
//!
//! Session cookie value: `base64url(json) "." base64url(hmac_sha256(json_b64))`.
//! Token cookie value: `base64url(token)`; the token itself is opaque.

use axum::http::HeaderMap;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::crypto;

use crate::application::config::AccessConfig;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::{AccessError, AccessResult};

/// Session store over one request's cookies.
///
/// Reads come from the request `Cookie` header; every mutation is mirrored
/// into `Set-Cookie` values that the caller attaches to the response.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    session_cookie: CookieConfig,
    token_cookie: CookieConfig,
    secret: [u8; 32],
    session_value: Option<String>,
    token_value: Option<String>,
    /// (cookie name, Set-Cookie value), at most one entry per name
    pending: Vec<(String, String)>,
}

impl CookieSessionStore {
    /// Empty store (no cookies received)
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            session_cookie: config.session_cookie(),
            token_cookie: config.token_cookie(),
            secret: config.session_secret,
            session_value: None,
            token_value: None,
            pending: Vec::new(),
        }
    }

    pub fn from_headers(headers: &HeaderMap, config: &AccessConfig) -> Self {
        let mut store = Self::new(config);
        store.session_value =
            extract_cookie(headers, &config.session_cookie_name).filter(|v| !v.is_empty());
        store.token_value = extract_cookie(headers, &config.token_cookie_name)
            .filter(|v| !v.is_empty())
            .and_then(|v| Self::decode_token(&v));
        store
    }

    /// Drain the `Set-Cookie` values accumulated so far
    pub fn take_set_cookies(&mut self) -> Vec<String> {
        self.pending.drain(..).map(|(_, header)| header).collect()
    }

    pub fn has_pending_cookies(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Sign and encode a profile into a cookie value
    pub fn encode_profile(profile: &UserProfile, secret: &[u8; 32]) -> AccessResult<String> {
        let json = serde_json::to_vec(profile)?;
        let payload = crypto::to_base64url(&json);
        let signature = crypto::sign(secret, payload.as_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify and decode a cookie value
    pub fn decode_profile(value: &str, secret: &[u8; 32]) -> AccessResult<UserProfile> {
        let (payload, signature) = value.split_once('.').ok_or(AccessError::MalformedSession)?;

        if !crypto::verify(secret, payload.as_bytes(), signature) {
            return Err(AccessError::MalformedSession);
        }

        let json = crypto::from_base64url(payload).map_err(|_| AccessError::MalformedSession)?;
        serde_json::from_slice(&json).map_err(|_| AccessError::MalformedSession)
    }

    fn decode_token(value: &str) -> Option<String> {
        let decoded = crypto::from_base64url(value)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok());
        if decoded.is_none() {
            tracing::debug!("Undecodable token cookie, ignoring it");
        }
        decoded
    }

    fn stage(&mut self, name: &str, header: String) {
        self.pending.retain(|(pending, _)| pending != name);
        self.pending.push((name.to_string(), header));
    }
}

impl SessionStore for CookieSessionStore {
    fn write(&mut self, profile: &UserProfile, token: &AuthToken) -> AccessResult<()> {
        // Encode first so a failure leaves both cookies untouched
        let session_value = Self::encode_profile(profile, &self.secret)?;

        let session_header = self.session_cookie.build_set_cookie(&session_value);
        let token_value = crypto::to_base64url(token.as_str().as_bytes());
        let token_header = self.token_cookie.build_set_cookie(&token_value);
        let session_name = self.session_cookie.name.clone();
        let token_name = self.token_cookie.name.clone();

        self.stage(&session_name, session_header);
        self.stage(&token_name, token_header);
        self.session_value = Some(session_value);
        self.token_value = Some(token.as_str().to_string());
        Ok(())
    }

    fn read(&mut self) -> Option<UserProfile> {
        let value = self.session_value.as_deref()?;

        match Self::decode_profile(value, &self.secret) {
            Ok(profile) => Some(profile),
            Err(_) => {
                tracing::warn!("Malformed session cookie, clearing it");
                self.clear();
                None
            }
        }
    }

    fn token(&self) -> Option<AuthToken> {
        self.token_value.clone().and_then(AuthToken::new)
    }

    fn clear(&mut self) {
        let session_name = self.session_cookie.name.clone();
        let token_name = self.token_cookie.name.clone();
        let session_header = self.session_cookie.build_delete_cookie();
        let token_header = self.token_cookie.build_delete_cookie();

        self.stage(&session_name, session_header);
        self.stage(&token_name, token_header);
        self.session_value = None;
        self.token_value = None;
    }
}
