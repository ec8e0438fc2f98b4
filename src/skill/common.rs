//! Intents available in both states

use crate::response::{Response, ResponseBuilder};

/// Tells the user about new functionality in this skill
pub(super) fn whats_new(reply: ResponseBuilder) -> Response {
    reply
        .say(
            "Right now, everything is new! Check the Alexa app for a detailed description of \
             what you can do with this skill.",
        )
        .send()
}
