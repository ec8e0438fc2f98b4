//! The not-linked state: everything funnels the user toward PIN linking.
//!
//! Flow: explain linking, issue a PIN, then poll it each time the user comes
//! back until plex.tv reports it authorized. The authorized branch is the only
//! place in the skill where the conversation state changes.

use super::{common, Skill};
use crate::linking::PinPoll;
use crate::response::{Response, ResponseBuilder};
use crate::speech::{spoken_pin, SPOKEN_LINK_URL};
use crate::turn::{Intent, TurnRequest};
use crate::user::{LinkingPin, UserRecord};
use anyhow::{Context, Result};
use tracing::info;

const LINK_CARD_TITLE: &str = "Link Alexa to your Plex account";

pub(super) async fn dispatch(
    skill: &Skill,
    turn: &TurnRequest,
    user: &mut UserRecord,
) -> Result<Response> {
    let reply = ResponseBuilder::new();
    match turn {
        TurnRequest::Launch => intro(skill, user, reply).await,
        TurnRequest::Intent { name, .. } => match Intent::parse(name) {
            Intent::Setup => setup(skill, user, reply).await,
            Intent::WhatsNew => Ok(common::whats_new(reply)),
            // Everything else gets the linking explanation
            _ => intro(skill, user, reply).await,
        },
    }
}

async fn intro(skill: &Skill, user: &mut UserRecord, reply: ResponseBuilder) -> Result<Response> {
    if user.pin.is_some() {
        // Mid-linking already; re-explaining from scratch is just confusing,
        // so push them to the next step.
        return setup(skill, user, reply).await;
    }

    Ok(reply
        .say(format!(
            "Welcome to the Plex skill! To start using it, you'll need to let me access \
             your Plex account. When you have a few minutes and are in front of a computer \
             with a web browser open, just say 'Alexa, ask {} to begin setup'.",
            skill.config.skill.invocation_name
        ))
        .should_end_session(false)
        .send())
}

/// The linking driver. Idempotent: safe to hit from any of the setup aliases,
/// repeatedly, until the PIN authorizes.
pub(super) async fn setup(
    skill: &Skill,
    user: &mut UserRecord,
    reply: ResponseBuilder,
) -> Result<Response> {
    let Some(pin) = user.pin.clone() else {
        return issue_pin(skill, user, reply, PinReason::FirstTime).await;
    };

    match skill
        .linking
        .check_pin(&pin)
        .await
        .context("Failed to check PIN authorization status")?
    {
        PinPoll::Authorized { token } => finish_linking(skill, user, token, reply).await,
        PinPoll::Waiting => Ok(prompt_pin_again(&pin, reply)),
        PinPoll::Invalid => issue_pin(skill, user, reply, PinReason::Expired).await,
    }
}

enum PinReason {
    FirstTime,
    Expired,
}

async fn issue_pin(
    skill: &Skill,
    user: &mut UserRecord,
    reply: ResponseBuilder,
    reason: PinReason,
) -> Result<Response> {
    let pin = skill
        .linking
        .request_pin()
        .await
        .context("Failed to request a linking PIN")?;
    skill
        .store
        .update_pin(user, pin.clone())
        .await
        .context("Failed to persist the linking PIN")?;

    info!("Issued linking PIN for user {}", user.id);

    let spoken = spoken_pin(&pin.code);
    let instructions = match reason {
        PinReason::FirstTime => format!(
            "Alright, let's get started. To link me to your Plex account, you'll need to open \
             your web browser and navigate to {}<break strength='x-strong'/>On that page, enter \
             the following PIN: {}. <break strength='strong'/>After you've entered the PIN, \
             just say <break strength='strong'/>'continue setup'.",
            SPOKEN_LINK_URL, spoken
        ),
        PinReason::Expired => format!(
            "Sorry about that. It appears that your previous PIN expired, so I've generated a \
             new one. Navigate to {} and enter this new PIN: {}.",
            SPOKEN_LINK_URL, spoken
        ),
    };

    Ok(reply
        .say(instructions)
        .reprompt(format!(
            "Once again, the website is {} and your PIN is {}. If you need a little more time, \
             that's okay. Simply say <break strength='strong'/>'Alexa, ask {} to continue setup' \
             when you are ready to continue.",
            SPOKEN_LINK_URL, spoken, skill.config.skill.invocation_name
        ))
        .card(LINK_CARD_TITLE, pin_card_body(&pin))
        .should_end_session(false)
        .send())
}

/// Status still `Waiting`: re-speak the existing PIN without issuing a new one
fn prompt_pin_again(pin: &LinkingPin, reply: ResponseBuilder) -> Response {
    let spoken = spoken_pin(&pin.code);
    reply
        .say(format!(
            "Navigate to {} and enter the following PIN: {}.",
            SPOKEN_LINK_URL, spoken
        ))
        .reprompt(format!("Again, your PIN is {}.", spoken))
        .card(LINK_CARD_TITLE, pin_card_body(pin))
        .should_end_session(false)
        .send()
}

/// The one NotAuthed -> Authed transition: persist the token, then run the
/// same default-selection logic the authed state uses on entry.
async fn finish_linking(
    skill: &Skill,
    user: &mut UserRecord,
    token: String,
    reply: ResponseBuilder,
) -> Result<Response> {
    skill
        .store
        .update_auth_token(user, token)
        .await
        .context("Failed to persist the auth token")?;
    skill
        .store
        .setup_defaults(user, true)
        .await
        .context("Failed to populate default selections")?;

    info!("Linked Plex account for user {}", user.id);

    let server = user.server_name.as_deref().unwrap_or("your server");
    let player = user.player_name.as_deref().unwrap_or("your player");

    Ok(reply
        .say(format!(
            "Congratulations! I am now linked to your Plex account. To save you some time, I \
             went ahead and made some assumptions about which server and which player you want \
             to use. For the server, I picked {}. And for the player, I picked {}. If you'd \
             like to change this, simply say 'Alexa, ask {} to change some settings'.",
            server, player, skill.config.skill.invocation_name
        ))
        .send())
}

fn pin_card_body(pin: &LinkingPin) -> String {
    format!(
        "Open http://plex.tv/link and enter the following PIN:\n\n{}",
        pin.code
    )
}
