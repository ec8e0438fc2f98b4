pub mod config;
pub mod linking;
pub mod media;
pub mod response;
pub mod session;
pub mod skill;
pub mod speech;
pub mod store;
pub mod turn;
pub mod user;

pub use config::Config;
pub use linking::{LinkingClient, PinPoll};
pub use media::{MediaClient, MediaItem, PlayRequest, StartShowOptions};
pub use response::{Card, Response, ResponseBuilder};
pub use session::{PromptAction, PromptData, Session};
pub use skill::{derive_state, Skill, StateTag};
pub use store::{MemoryUserStore, Selection, UserStore};
pub use turn::{Intent, TurnRequest};
pub use user::{LinkingPin, UserRecord};
