//! Application Configuration
//!
//! Configuration for the access layer: cookie names and attributes, the
//! signing secret, and where the backend API lives.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Base URL of the backend REST API (no trailing slash)
    pub backend_base_url: String,
    /// Session (profile) cookie name
    pub session_cookie_name: String,
    /// Bearer token cookie name
    pub token_cookie_name: String,
    /// HMAC key for the session cookie (32 bytes)
    pub session_secret: [u8; 32],
    /// Cookie lifetime (30 days)
    pub session_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Timeout for backend calls; `None` leaves it to the backend
    pub upstream_timeout: Option<Duration>,
    /// Realtime messaging socket URL
    pub realtime_url: Option<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            backend_base_url: "http://localhost:5000/api".to_string(),
            session_cookie_name: "user_data".to_string(),
            token_cookie_name: "token".to_string(),
            session_secret: [0u8; 32],
            session_max_age: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            upstream_timeout: None,
            realtime_url: None,
        }
    }
}

impl AccessConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Point at another backend
    pub fn with_backend(mut self, base_url: impl Into<String>) -> Self {
        self.backend_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn session_cookie(&self) -> CookieConfig {
        self.cookie(&self.session_cookie_name)
    }

    pub fn token_cookie(&self) -> CookieConfig {
        self.cookie(&self.token_cookie_name)
    }

    fn cookie(&self, name: &str) -> CookieConfig {
        CookieConfig {
            name: name.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_max_age.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AccessConfig::default();

        assert_eq!(config.session_cookie_name, "user_data");
        assert_eq!(config.token_cookie_name, "token");
        assert_eq!(config.session_max_age, Duration::from_secs(2_592_000));
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.upstream_timeout.is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AccessConfig::with_random_secret();
        let config2 = AccessConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AccessConfig::development();

        assert!(!config.cookie_secure);
        assert!(!config.session_cookie().secure);
    }

    #[test]
    fn test_cookie_attributes_follow_config() {
        let cookie = AccessConfig::default().session_cookie();

        assert_eq!(cookie.name, "user_data");
        assert!(cookie.http_only);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age_secs, Some(2_592_000));
    }

    #[test]
    fn test_with_backend_trims_trailing_slash() {
        let config = AccessConfig::default().with_backend("http://api.internal/v1/");
        assert_eq!(config.backend_base_url, "http://api.internal/v1");
    }
}
