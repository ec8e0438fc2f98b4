use super::UserStore;
use crate::user::{LinkingPin, UserRecord};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A named server or player a user's defaults can be picked from
#[derive(Debug, Clone)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

impl Selection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// In-memory `UserStore` for embedding and tests.
///
/// Default selections are picked from the configured server/player lists,
/// first entry wins, matching how a fresh account gets auto-configured.
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    servers: Vec<Selection>,
    players: Vec<Selection>,
}

impl MemoryUserStore {
    pub fn new(servers: Vec<Selection>, players: Vec<Selection>) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            servers,
            players,
        }
    }

    /// Fetch a user record, creating a blank one on first sight
    pub async fn get_or_create(&self, user_id: &str) -> UserRecord {
        let mut users = self.users.write().await;
        users
            .entry(user_id.to_string())
            .or_insert_with(|| {
                info!("Creating user record: {}", user_id);
                UserRecord::new(user_id)
            })
            .clone()
    }

    pub async fn get(&self, user_id: &str) -> Option<UserRecord> {
        self.users.read().await.get(user_id).cloned()
    }

    async fn persist(&self, user: &UserRecord) {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn update_pin(&self, user: &mut UserRecord, pin: LinkingPin) -> Result<()> {
        user.pin = Some(pin);
        self.persist(user).await;
        Ok(())
    }

    async fn update_auth_token(&self, user: &mut UserRecord, token: String) -> Result<()> {
        user.auth_token = Some(token);
        self.persist(user).await;
        Ok(())
    }

    async fn setup_defaults(&self, user: &mut UserRecord, force: bool) -> Result<bool> {
        let mut changed = false;

        if force || user.server_name.is_none() {
            if let Some(server) = self.servers.first() {
                changed |= user.server_id.as_deref() != Some(server.id.as_str());
                user.server_name = Some(server.name.clone());
                user.server_id = Some(server.id.clone());
            }
        }

        if force || user.player_name.is_none() {
            if let Some(player) = self.players.first() {
                changed |= user.player_id.as_deref() != Some(player.id.as_str());
                user.player_name = Some(player.name.clone());
                user.player_id = Some(player.id.clone());
            }
        }

        if changed {
            info!(
                "Defaults for {}: server={:?} player={:?}",
                user.id, user.server_name, user.player_name
            );
            self.persist(user).await;
        }

        Ok(changed)
    }
}
