//! The linked state: on-deck browsing, playback dispatch, and the settings
//! stub. Yes/no confirmations are handled in `confirm`.

use super::{common, confirm, Skill};
use crate::media::StartShowOptions;
use crate::response::{Response, ResponseBuilder};
use crate::session::Session;
use crate::speech::natural_list;
use crate::turn::{Intent, TurnRequest};
use crate::user::UserRecord;
use anyhow::{Context, Result};
use tracing::warn;

pub(super) async fn dispatch(
    skill: &Skill,
    turn: &TurnRequest,
    user: &mut UserRecord,
    session: &mut Session,
) -> Result<Response> {
    let reply = ResponseBuilder::new();
    let name = match turn {
        TurnRequest::Launch => return Ok(launch(reply)),
        TurnRequest::Intent { name, .. } => name,
    };

    match Intent::parse(name) {
        Intent::OnDeck => on_deck(skill, reply).await,
        Intent::StartShow => {
            start_show(skill, turn, user, session, reply, StartVariant::NextUnwatched).await
        }
        Intent::StartRandomShow => {
            start_show(skill, turn, user, session, reply, StartVariant::Random).await
        }
        Intent::StartSpecificEpisode => {
            start_show(skill, turn, user, session, reply, StartVariant::Specific).await
        }
        Intent::StartHighRatedEpisode => {
            start_show(skill, turn, user, session, reply, StartVariant::HighRated).await
        }
        Intent::Yes => confirm::yes(skill, session, reply).await,
        Intent::No => confirm::no(skill, session, reply).await,
        Intent::Setup => settings(skill, user, reply).await,
        Intent::WhatsNew => Ok(common::whats_new(reply)),
        Intent::Other(other) => Ok(default_intent(&other, reply)),
    }
}

fn launch(reply: ResponseBuilder) -> Response {
    reply
        .say("Plex is listening...")
        .should_end_session(false)
        .send()
}

/// Fallback for intents the authed state doesn't handle. Must never go
/// silent; a turn with no response is a stuck conversation.
fn default_intent(name: &str, reply: ResponseBuilder) -> Response {
    warn!("Got an intent in the authed state that was not handled: {}", name);
    reply
        .say("Sorry, I'm not sure what to do with that request.")
        .send()
}

async fn on_deck(skill: &Skill, reply: ResponseBuilder) -> Result<Response> {
    let items = skill
        .media
        .on_deck(&skill.config.plex.tv_library)
        .await
        .context("Failed to fetch the on-deck list")?;
    let show_list = skill
        .media
        .show_names(&items)
        .await
        .context("Failed to resolve show names")?;

    if show_list.is_empty() {
        return Ok(reply.say("You have no shows on deck!").send());
    }

    let spoken = natural_list(&show_list, "and", true);
    Ok(reply
        .say(format!("On deck you've got {}.", spoken))
        .card(
            "TV Shows On Deck",
            format!("On deck in your TV library:\n\n{}", show_list.join("\n")),
        )
        .send())
}

enum StartVariant {
    NextUnwatched,
    Random,
    Specific,
    HighRated,
}

async fn start_show(
    skill: &Skill,
    turn: &TurnRequest,
    user: &UserRecord,
    session: &mut Session,
    reply: ResponseBuilder,
    variant: StartVariant,
) -> Result<Response> {
    let Some(show_name) = turn.slot("showName") else {
        // TODO ask for which show
        return Ok(reply.say("No show specified.").send());
    };

    let mut options = StartShowOptions {
        player_name: user.player_name.clone(),
        spoken_show_name: show_name.to_string(),
        ..Default::default()
    };
    match variant {
        StartVariant::NextUnwatched => {}
        StartVariant::Random => options.force_random = true,
        StartVariant::Specific => {
            options.season_number = numeric_slot(turn, "seasonNumber");
            options.episode_number = numeric_slot(turn, "episodeNumber");
        }
        StartVariant::HighRated => {
            options.force_random = true;
            options.only_top_rated = Some(0.10);
        }
    }

    // The media client owns resolution from here; it may answer directly or
    // stage a confirmation on the session before handing the reply back.
    let reply = skill
        .media
        .start_show(options, reply, session)
        .await
        .context("Failed to start the show")?;
    Ok(reply.send())
}

/// Slots carry strings; episode and season numbers that don't parse are
/// treated as not provided.
fn numeric_slot(turn: &TurnRequest, name: &str) -> Option<u32> {
    turn.slot(name).and_then(|v| v.parse().ok())
}

/// Settings stub: the only supported "change" is re-picking the default
/// server and player selections.
async fn settings(skill: &Skill, user: &mut UserRecord, reply: ResponseBuilder) -> Result<Response> {
    let changed = skill
        .store
        .setup_defaults(user, true)
        .await
        .context("Failed to reset default selections")?;

    if changed {
        let server = user.server_name.as_deref().unwrap_or("your server");
        let player = user.player_name.as_deref().unwrap_or("your player");
        Ok(reply
            .say(format!(
                "Sorry, right now the only setting I support is resetting your server and \
                 player selections, which I just did for you. Your server is now set to {}, \
                 and your player is {}. More robust settings options are coming soon!",
                server, player
            ))
            .send())
    } else {
        Ok(reply
            .say(
                "Sorry, but changing settings isn't supported at the moment. This feature is \
                 coming shortly!",
            )
            .send())
    }
}
