use crate::response::ResponseBuilder;
use crate::session::Session;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A library item as returned by the media server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// Opaque playback key understood by the server
    pub key: String,
    pub title: String,
    /// Title of the show an episode belongs to, if this item is an episode
    #[serde(default)]
    pub show_title: Option<String>,
}

/// Options bag for starting a show; variants of the start intents differ only
/// in which of these they set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartShowOptions {
    /// Player to start playback on
    pub player_name: Option<String>,

    /// Show name as spoken by the user, resolved against the library by the
    /// media client
    pub spoken_show_name: String,

    /// Pick a random episode instead of the next unwatched one
    pub force_random: bool,

    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,

    /// Restrict the random pick to this top fraction by rating
    /// (e.g. 0.10 = top 10%)
    pub only_top_rated: Option<f64>,
}

/// One playback request, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRequest {
    pub player_name: Option<String>,
    pub media_key: String,
    /// Resume offset in milliseconds
    pub offset: u64,
}

/// Client for browsing and controlling the media server.
///
/// `start_show` owns show resolution end to end: it may answer directly, or
/// stage a yes/no confirmation in the session and ask the question — either
/// way it hands the reply builder back so the caller stays on one completion
/// chain.
#[async_trait::async_trait]
pub trait MediaClient: Send + Sync {
    /// The server's next-to-watch list for a library section
    async fn on_deck(&self, library: &str) -> Result<Vec<MediaItem>>;

    /// Human-readable show names for a list of items, deduplicated, in order
    async fn show_names(&self, items: &[MediaItem]) -> Result<Vec<String>>;

    async fn start_show(
        &self,
        options: StartShowOptions,
        reply: ResponseBuilder,
        session: &mut Session,
    ) -> Result<ResponseBuilder>;

    async fn play_media(&self, request: PlayRequest) -> Result<()>;
}
