//! Infrastructure Layer
//!
//! Cookie session store and clients for the external backend services.

pub mod cookie_store;
pub mod http_auth_api;
pub mod websocket;

pub use cookie_store::CookieSessionStore;
pub use http_auth_api::HttpAuthApi;
pub use websocket::WsConnector;
