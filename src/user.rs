use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable per-user record.
///
/// `auth_token` present means the user is linked; the conversation state is
/// derived from this record every turn and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user identifier, owned by the user store
    pub id: String,

    /// Outstanding device-linking attempt, if any. Kept after expiry until
    /// replaced so we can tell "already had a PIN" from "needs a new PIN".
    pub pin: Option<LinkingPin>,

    /// Plex auth token; present iff the account is linked
    pub auth_token: Option<String>,

    pub server_name: Option<String>,
    pub server_id: Option<String>,
    pub player_name: Option<String>,
    pub player_id: Option<String>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pin: None,
            auth_token: None,
            server_name: None,
            server_id: None,
            player_name: None,
            player_id: None,
        }
    }
}

/// One outstanding device-linking attempt.
///
/// Superseded by a fresh PIN, never mutated; expiry is owned by the linking
/// service and shows up as an `Invalid` poll result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkingPin {
    /// Opaque identifier used when polling authorization status
    pub id: String,

    /// Short alphanumeric code the user enters on the link page
    pub code: String,

    pub created_at: DateTime<Utc>,
}

impl LinkingPin {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            created_at: Utc::now(),
        }
    }
}
