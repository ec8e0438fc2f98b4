use serde::{Deserialize, Serialize};

/// A finalized turn response, ready for the transport to render.
///
/// Only `ResponseBuilder::send` produces one, and it consumes the builder, so
/// a handler can neither respond twice nor finish without responding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Spoken output (SSML fragments joined in order)
    pub speech: String,
    /// Re-prompt spoken if the user stays silent while the session is open
    pub reprompt: Option<String>,
    pub card: Option<Card>,
    pub end_session: bool,
}

/// Visual companion shown in the platform's app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

/// Chainable builder for a turn response.
///
/// Turns end the session by default; handlers that want a follow-up call
/// `should_end_session(false)`.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    speech: Vec<String>,
    reprompt: Option<String>,
    card: Option<Card>,
    keep_session_open: bool,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append spoken text
    pub fn say(mut self, text: impl Into<String>) -> Self {
        self.speech.push(text.into());
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn card(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            body: body.into(),
        });
        self
    }

    pub fn should_end_session(mut self, end: bool) -> Self {
        self.keep_session_open = !end;
        self
    }

    /// Finalize the turn. Consumes the builder; each turn sends exactly once.
    pub fn send(self) -> Response {
        Response {
            speech: self.speech.join(" "),
            reprompt: self.reprompt,
            card: self.card,
            end_session: !self.keep_session_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_end_by_default() {
        let resp = ResponseBuilder::new().say("done").send();
        assert!(resp.end_session);
        assert_eq!(resp.speech, "done");
        assert!(resp.card.is_none());
    }

    #[test]
    fn say_accumulates_in_order() {
        let resp = ResponseBuilder::new()
            .say("first")
            .say("second")
            .should_end_session(false)
            .send();
        assert_eq!(resp.speech, "first second");
        assert!(!resp.end_session);
    }
}
