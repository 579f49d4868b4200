//! Websocket transport for the realtime connection manager

use http::{HeaderValue, header};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::application::config::AccessConfig;
use crate::domain::gateway::Connector;
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::{AccessError, AccessResult};

pub type WsConnection = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens `ws://` / `wss://` connections authenticated with the bearer token.
#[derive(Debug, Clone)]
pub struct WsConnector {
    url: String,
}

impl WsConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Connector for the configured realtime URL, if any
    pub fn from_config(config: &AccessConfig) -> Option<Self> {
        config.realtime_url.as_deref().map(Self::new)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Connector for WsConnector {
    type Connection = WsConnection;

    async fn open(&self, token: &AuthToken) -> AccessResult<WsConnection> {
        let mut request = self
            .url
            .as_str()
            .into_client_request()
            .map_err(|e| AccessError::Internal(format!("invalid realtime URL: {e}")))?;

        let bearer = HeaderValue::from_str(&token.bearer())
            .map_err(|_| AccessError::BadRequest("token is not a valid header value".to_string()))?;
        request.headers_mut().insert(header::AUTHORIZATION, bearer);

        let (stream, _response) = connect_async(request)
            .await
            .map_err(|e| AccessError::NetworkFailure(format!("realtime connect: {e}")))?;

        Ok(stream)
    }

    async fn close(&self, mut connection: WsConnection) {
        if let Err(e) = connection.close(None).await {
            tracing::debug!(error = %e, "Realtime socket was already closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_follows_realtime_url() {
        assert!(WsConnector::from_config(&AccessConfig::default()).is_none());

        let config = AccessConfig {
            realtime_url: Some("wss://chat.example.com/ws".to_string()),
            ..AccessConfig::default()
        };
        let connector = WsConnector::from_config(&config).unwrap();
        assert_eq!(connector.url(), "wss://chat.example.com/ws");
    }
}
