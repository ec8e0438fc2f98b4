//! Deferred yes/no confirmations.
//!
//! A prior handler stages `PromptData` in the session and leaves the turn
//! open; the next yes or no intent lands here. Prompt data is consumed on
//! read, so each confirmation resolves at most once per session.

use super::Skill;
use crate::media::PlayRequest;
use crate::response::{Response, ResponseBuilder};
use crate::session::{PromptAction, PromptData, Session};
use anyhow::{Context, Result};
use tracing::{info, warn};

pub(super) async fn yes(
    skill: &Skill,
    session: &mut Session,
    reply: ResponseBuilder,
) -> Result<Response> {
    let Some(prompt) = session.take_prompt_data() else {
        // A yes with nothing pending, e.g. after a timeout. End gracefully.
        info!("Got a yes intent but no prompt data. Ending session.");
        return Ok(reply.send());
    };

    let branch = Branch {
        action: prompt.yes_action,
        response: prompt.yes_response.clone(),
        media_key: prompt.media_key.clone(),
        media_offset: prompt.media_offset,
    };
    resolve(skill, &prompt, branch, reply).await
}

pub(super) async fn no(
    skill: &Skill,
    session: &mut Session,
    reply: ResponseBuilder,
) -> Result<Response> {
    let Some(prompt) = session.take_prompt_data() else {
        info!("Got a no intent but no prompt data. Ending session.");
        return Ok(reply.send());
    };

    let branch = Branch {
        action: prompt.no_action,
        response: prompt.no_response.clone(),
        media_key: prompt.no_media_key.clone(),
        media_offset: prompt.no_media_offset,
    };
    resolve(skill, &prompt, branch, reply).await
}

/// The chosen branch of a confirmation, either side's fields normalized
struct Branch {
    action: PromptAction,
    response: String,
    media_key: Option<String>,
    media_offset: u64,
}

async fn resolve(
    skill: &Skill,
    prompt: &PromptData,
    branch: Branch,
    reply: ResponseBuilder,
) -> Result<Response> {
    match branch.action {
        PromptAction::EndSession => Ok(reply.say(branch.response).send()),
        PromptAction::StartEpisode => {
            let Some(media_key) = branch.media_key else {
                warn!("Confirmation wants to start an episode but has no media key: {:?}", prompt);
                return Ok(reply.send());
            };
            skill
                .media
                .play_media(PlayRequest {
                    player_name: prompt.player_name.clone(),
                    media_key,
                    offset: branch.media_offset,
                })
                .await
                .context("Failed to start playback")?;
            Ok(reply.say(branch.response).send())
        }
        PromptAction::Unknown => {
            warn!("Got an unexpected confirmation action. Prompt data: {:?}", prompt);
            Ok(reply.send())
        }
    }
}
