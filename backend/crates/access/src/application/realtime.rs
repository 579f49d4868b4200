//! Realtime Connection Manager
//!
//! Owns the single messaging connection of a client with an explicit
//! lifecycle. The transport is injected through [`Connector`].

use tokio::sync::Mutex;

use crate::domain::gateway::Connector;
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::AccessResult;

pub struct ConnectionManager<C>
where
    C: Connector,
{
    connector: C,
    connection: Mutex<Option<C::Connection>>,
}

impl<C> ConnectionManager<C>
where
    C: Connector,
{
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            connection: Mutex::new(None),
        }
    }

    /// Open the connection unless one is already up.
    pub async fn connect(&self, token: &AuthToken) -> AccessResult<()> {
        let mut slot = self.connection.lock().await;
        if slot.is_some() {
            tracing::debug!("Realtime connection already open");
            return Ok(());
        }

        *slot = Some(self.connector.open(token).await?);
        tracing::info!("Realtime connection opened");
        Ok(())
    }

    /// Close the connection if there is one.
    pub async fn disconnect(&self) {
        let connection = self.connection.lock().await.take();
        if let Some(connection) = connection {
            self.connector.close(connection).await;
            tracing::info!("Realtime connection closed");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}
