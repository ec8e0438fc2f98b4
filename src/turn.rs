use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One turn of a voice conversation, as delivered by the platform transport.
///
/// Slot values arrive already resolved upstream; a slot may be present with a
/// null value when the user omitted it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TurnRequest {
    /// Session start with no specific intent
    Launch,
    /// A named intent with its slot values
    #[serde(rename_all = "camelCase")]
    Intent {
        name: String,
        #[serde(default)]
        slots: HashMap<String, Option<String>>,
    },
}

impl TurnRequest {
    pub fn intent(name: &str) -> Self {
        TurnRequest::Intent {
            name: name.to_string(),
            slots: HashMap::new(),
        }
    }

    pub fn intent_with_slots<I, K, V>(name: &str, slots: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        TurnRequest::Intent {
            name: name.to_string(),
            slots: slots
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }

    /// Slot value, if the slot was provided and non-null
    pub fn slot(&self, name: &str) -> Option<&str> {
        match self {
            TurnRequest::Launch => None,
            TurnRequest::Intent { slots, .. } => {
                slots.get(name).and_then(|v| v.as_deref())
            }
        }
    }

    /// Intent name as sent by the platform, if any
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            TurnRequest::Launch => None,
            TurnRequest::Intent { name, .. } => Some(name),
        }
    }
}

/// The closed set of intents this skill understands.
///
/// Names the platform may send that we don't recognize land in `Other` and
/// fall through to the active state's default handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Any of the setup/settings aliases (SetupIntent, ContinueSetupIntent,
    /// BeginSetupIntent, AuthorizeMeIntent, ChangeSettingsIntent)
    Setup,
    OnDeck,
    StartShow,
    StartRandomShow,
    StartSpecificEpisode,
    StartHighRatedEpisode,
    Yes,
    No,
    WhatsNew,
    Other(String),
}

impl Intent {
    pub fn parse(name: &str) -> Intent {
        match name {
            "SetupIntent" | "ContinueSetupIntent" | "BeginSetupIntent" | "AuthorizeMeIntent"
            | "ChangeSettingsIntent" => Intent::Setup,
            "OnDeckIntent" => Intent::OnDeck,
            "StartShowIntent" => Intent::StartShow,
            "StartRandomShowIntent" => Intent::StartRandomShow,
            "StartSpecificEpisodeIntent" => Intent::StartSpecificEpisode,
            "StartHighRatedEpisodeIntent" => Intent::StartHighRatedEpisode,
            "AMAZON.YesIntent" => Intent::Yes,
            "AMAZON.NoIntent" => Intent::No,
            "WhatsNewIntent" => Intent::WhatsNew,
            other => Intent::Other(other.to_string()),
        }
    }
}
