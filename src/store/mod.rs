//! User record persistence
//!
//! The durable store behind `UserRecord`: updates are written through the
//! store so the caller's in-memory record and the backing store never
//! disagree within a turn.

mod memory;

pub use memory::{MemoryUserStore, Selection};

use crate::user::{LinkingPin, UserRecord};
use anyhow::Result;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Replace the user's outstanding linking PIN
    async fn update_pin(&self, user: &mut UserRecord, pin: LinkingPin) -> Result<()>;

    /// Persist the auth token issued when a PIN was authorized
    async fn update_auth_token(&self, user: &mut UserRecord, token: String) -> Result<()>;

    /// Populate server/player selections. With `force`, re-pick even if set;
    /// otherwise only fill in missing ones. Returns whether anything changed.
    async fn setup_defaults(&self, user: &mut UserRecord, force: bool) -> Result<bool>;
}
