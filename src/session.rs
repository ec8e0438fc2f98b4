use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

const PROMPT_DATA_KEY: &str = "promptData";

/// Ephemeral per-conversation state, persisted between turns by the host
/// transport as an attribute bag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    attributes: HashMap<String, serde_json::Value>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: format!("session-{}", uuid::Uuid::new_v4()),
            attributes: HashMap::new(),
        }
    }

    /// Typed read of a session attribute. Values that fail to deserialize are
    /// treated as absent (and logged); stale attributes from an older session
    /// shape must not wedge the conversation.
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.attributes.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Discarding unreadable session attribute {}: {}", key, e);
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.attributes.insert(key.to_string(), v);
            }
            Err(e) => warn!("Failed to store session attribute {}: {}", key, e),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    pub fn set_prompt_data(&mut self, data: &PromptData) {
        self.set(PROMPT_DATA_KEY, data);
    }

    /// Read and consume the pending confirmation. Each confirmation is
    /// single-use: a second yes/no in the same session finds nothing.
    pub fn take_prompt_data(&mut self) -> Option<PromptData> {
        let data = self.get(PROMPT_DATA_KEY);
        self.attributes.remove(PROMPT_DATA_KEY);
        data
    }
}

/// A pending yes/no confirmation and its two resolution branches, staged by a
/// prior handler (typically ambiguous show resolution in the media client).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptData {
    pub yes_action: PromptAction,
    pub no_action: PromptAction,

    /// Spoken when the user answers yes
    pub yes_response: String,
    /// Spoken when the user answers no
    pub no_response: String,

    #[serde(default)]
    pub player_name: Option<String>,

    /// Media item played on the yes branch
    #[serde(default)]
    pub media_key: Option<String>,
    #[serde(default)]
    pub media_offset: u64,

    /// Media item played on the no branch
    #[serde(default)]
    pub no_media_key: Option<String>,
    #[serde(default)]
    pub no_media_offset: u64,
}

/// What a confirmation branch does when chosen. `Unknown` captures values
/// this version doesn't recognize (e.g. written by a newer deployment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromptAction {
    StartEpisode,
    EndSession,
    #[serde(other)]
    Unknown,
}
