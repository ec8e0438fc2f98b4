use crate::user::LinkingPin;
use anyhow::Result;

/// Outcome of polling a PIN's authorization status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinPoll {
    /// The user entered the PIN on the link page; carries the issued token
    Authorized { token: String },
    /// Still pending; keep the same PIN and try again later
    Waiting,
    /// Expired or rejected; a replacement PIN is needed
    Invalid,
}

/// Client for the PIN-based device-linking API.
///
/// Implementations talk to plex.tv; tests script the results. Retry and
/// backoff, if any, belong to the implementation, not the callers here.
#[async_trait::async_trait]
pub trait LinkingClient: Send + Sync {
    /// Request a fresh PIN for a new linking attempt
    async fn request_pin(&self) -> Result<LinkingPin>;

    /// Poll the authorization status of an outstanding PIN
    async fn check_pin(&self, pin: &LinkingPin) -> Result<PinPoll>;
}
