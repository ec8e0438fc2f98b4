//! Conversation state machine
//!
//! This module drives every turn of the conversation:
//! - derives the active state from the user record (linked or not)
//! - runs the state's setup hook
//! - dispatches the intent through the state's closed handler map
//! - funnels every failure through one error sink that still responds
//!
//! A turn always produces exactly one `Response`: handlers return
//! `Result<Response>`, a `Response` only comes from consuming a
//! `ResponseBuilder`, and the error sink covers the failure paths.

mod authed;
mod common;
mod confirm;
mod not_authed;

use crate::config::Config;
use crate::linking::LinkingClient;
use crate::media::MediaClient;
use crate::response::{Response, ResponseBuilder};
use crate::session::Session;
use crate::store::UserStore;
use crate::turn::TurnRequest;
use crate::user::UserRecord;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::error;

/// The two top-level conversational states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTag {
    NotAuthed,
    Authed,
}

/// Derive the active state from the user record. Called once per turn and
/// never cached; the record is the single source of truth.
pub fn derive_state(user: &UserRecord) -> StateTag {
    if user.auth_token.is_some() {
        StateTag::Authed
    } else {
        StateTag::NotAuthed
    }
}

/// The skill backend: collaborator clients plus the dispatch logic.
///
/// One `Skill` serves all sessions; the host transport guarantees at most one
/// in-flight turn per session.
pub struct Skill {
    pub(crate) config: Config,
    pub(crate) linking: Arc<dyn LinkingClient>,
    pub(crate) media: Arc<dyn MediaClient>,
    pub(crate) store: Arc<dyn UserStore>,
}

impl Skill {
    pub fn new(
        config: Config,
        linking: Arc<dyn LinkingClient>,
        media: Arc<dyn MediaClient>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            config,
            linking,
            media,
            store,
        }
    }

    /// Process one turn. Infallible from the transport's point of view:
    /// handler errors are logged and turned into an apology response.
    pub async fn handle_turn(
        &self,
        turn: &TurnRequest,
        user: &mut UserRecord,
        session: &mut Session,
    ) -> Response {
        match self.run_turn(turn, user, session).await {
            Ok(response) => response,
            Err(err) => self.error_response(&err, turn),
        }
    }

    async fn run_turn(
        &self,
        turn: &TurnRequest,
        user: &mut UserRecord,
        session: &mut Session,
    ) -> Result<Response> {
        match derive_state(user) {
            StateTag::NotAuthed => not_authed::dispatch(self, turn, user).await,
            StateTag::Authed => {
                // State-entry hook: make sure a server and player are picked
                self.store
                    .setup_defaults(user, false)
                    .await
                    .context("Failed to populate default selections")?;
                authed::dispatch(self, turn, user, session).await
            }
        }
    }

    /// The single error sink. Every collaborator failure lands here, and the
    /// turn still gets its response.
    fn error_response(&self, err: &anyhow::Error, turn: &TurnRequest) -> Response {
        error!(
            "Turn failed (intent: {}): {:#}",
            turn.intent_name().unwrap_or("launch"),
            err
        );
        ResponseBuilder::new()
            .say("Sorry, I had trouble talking to Plex. Please try again in a moment.")
            .send()
    }
}
