//! Shared test doubles: a scripted linking client, a recording media client,
//! and a ready-made `Skill` wired to them.

#![allow(dead_code)]

use anyhow::{bail, Result};
use plex_skill::{
    Config, LinkingClient, LinkingPin, MediaClient, MediaItem, MemoryUserStore, PinPoll,
    PlayRequest, PromptData, ResponseBuilder, Selection, Session, Skill, StartShowOptions,
    UserRecord, UserStore,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

/// Linking client with scripted PIN codes and a settable poll result
pub struct FakeLinkingClient {
    codes: Mutex<VecDeque<String>>,
    poll: Mutex<PinPoll>,
    failing: AtomicBool,
    pub pins_issued: AtomicUsize,
    pub polls: AtomicUsize,
}

impl FakeLinkingClient {
    pub fn new() -> Self {
        Self {
            codes: Mutex::new(VecDeque::from(["a1b2".to_string(), "c3d4".to_string()])),
            poll: Mutex::new(PinPoll::Waiting),
            failing: AtomicBool::new(false),
            pins_issued: AtomicUsize::new(0),
            polls: AtomicUsize::new(0),
        }
    }

    pub fn set_poll(&self, result: PinPoll) {
        *self.poll.lock().unwrap() = result;
    }

    /// Make every call fail, simulating the linking API being down
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl LinkingClient for FakeLinkingClient {
    async fn request_pin(&self) -> Result<LinkingPin> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("linking API unavailable");
        }
        let n = self.pins_issued.fetch_add(1, Ordering::SeqCst);
        let code = self
            .codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| format!("zz{:02}", n));
        Ok(LinkingPin::new(format!("pin-{}", n), code))
    }

    async fn check_pin(&self, _pin: &LinkingPin) -> Result<PinPoll> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("linking API unavailable");
        }
        self.polls.fetch_add(1, Ordering::SeqCst);
        Ok(self.poll.lock().unwrap().clone())
    }
}

/// Media client that records every call and can stage a confirmation from
/// `start_show`, the way ambiguous show resolution does.
pub struct FakeMediaClient {
    pub on_deck_items: Mutex<Vec<MediaItem>>,
    pub prompt_to_stage: Mutex<Option<PromptData>>,
    pub start_show_calls: Mutex<Vec<StartShowOptions>>,
    pub play_calls: Mutex<Vec<PlayRequest>>,
}

impl FakeMediaClient {
    pub fn new() -> Self {
        Self {
            on_deck_items: Mutex::new(Vec::new()),
            prompt_to_stage: Mutex::new(None),
            start_show_calls: Mutex::new(Vec::new()),
            play_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_on_deck(&self, shows: &[&str]) {
        let items = shows
            .iter()
            .enumerate()
            .map(|(i, show)| MediaItem {
                key: format!("/library/metadata/{}", i),
                title: format!("Episode {}", i + 1),
                show_title: Some(show.to_string()),
            })
            .collect();
        *self.on_deck_items.lock().unwrap() = items;
    }
}

#[async_trait::async_trait]
impl MediaClient for FakeMediaClient {
    async fn on_deck(&self, _library: &str) -> Result<Vec<MediaItem>> {
        Ok(self.on_deck_items.lock().unwrap().clone())
    }

    async fn show_names(&self, items: &[MediaItem]) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for item in items {
            let name = item.show_title.clone().unwrap_or_else(|| item.title.clone());
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    async fn start_show(
        &self,
        options: StartShowOptions,
        reply: ResponseBuilder,
        session: &mut Session,
    ) -> Result<ResponseBuilder> {
        let show = options.spoken_show_name.clone();
        self.start_show_calls.lock().unwrap().push(options);

        if let Some(prompt) = self.prompt_to_stage.lock().unwrap().clone() {
            session.set_prompt_data(&prompt);
            return Ok(reply
                .say(format!("Did you mean {}?", show))
                .should_end_session(false));
        }
        Ok(reply.say(format!("Playing {}.", show)))
    }

    async fn play_media(&self, request: PlayRequest) -> Result<()> {
        self.play_calls.lock().unwrap().push(request);
        Ok(())
    }
}

/// A skill wired to fresh fakes, plus handles to script and inspect them
pub struct TestHarness {
    pub skill: Skill,
    pub linking: Arc<FakeLinkingClient>,
    pub media: Arc<FakeMediaClient>,
    pub store: Arc<MemoryUserStore>,
}

pub fn harness() -> TestHarness {
    init_tracing();

    let linking = Arc::new(FakeLinkingClient::new());
    let media = Arc::new(FakeMediaClient::new());
    let store = Arc::new(MemoryUserStore::new(
        vec![Selection::new("srv-1", "Den Server")],
        vec![Selection::new("ply-1", "Living Room")],
    ));

    let skill = Skill::new(
        Config::default(),
        Arc::clone(&linking) as Arc<dyn LinkingClient>,
        Arc::clone(&media) as Arc<dyn MediaClient>,
        Arc::clone(&store) as Arc<dyn UserStore>,
    );

    TestHarness {
        skill,
        linking,
        media,
        store,
    }
}

impl TestHarness {
    pub async fn new_user(&self, id: &str) -> UserRecord {
        self.store.get_or_create(id).await
    }

    /// A user who has already completed linking
    pub async fn linked_user(&self, id: &str) -> UserRecord {
        let mut user = self.store.get_or_create(id).await;
        self.store
            .update_auth_token(&mut user, format!("token-{}", id))
            .await
            .unwrap();
        user
    }
}
