//! State derivation and turn dispatch: setup hooks, launch handlers, and the
//! default fallbacks that keep every turn answered.

mod common;

use common::harness;
use plex_skill::{derive_state, Session, StateTag, TurnRequest, UserRecord};

#[test]
fn state_follows_the_auth_token() {
    let mut user = UserRecord::new("u1");
    assert_eq!(derive_state(&user), StateTag::NotAuthed);

    user.auth_token = Some("tok".to_string());
    assert_eq!(derive_state(&user), StateTag::Authed);
}

#[tokio::test]
async fn authed_launch_listens_and_keeps_the_session_open() {
    let h = harness();
    let mut user = h.linked_user("u1").await;
    let mut session = Session::new();

    let resp = h
        .skill
        .handle_turn(&TurnRequest::Launch, &mut user, &mut session)
        .await;

    assert_eq!(resp.speech, "Plex is listening...");
    assert!(!resp.end_session);
}

#[tokio::test]
async fn authed_unknown_intent_apologizes_instead_of_going_silent() {
    let h = harness();
    let mut user = h.linked_user("u1").await;
    let mut session = Session::new();

    let resp = h
        .skill
        .handle_turn(&TurnRequest::intent("AMAZON.HelpIntent"), &mut user, &mut session)
        .await;

    assert!(resp.speech.contains("not sure what to do"));
}

#[tokio::test]
async fn authed_setup_hook_fills_missing_selections_on_any_turn() {
    let h = harness();
    let mut user = h.linked_user("u1").await;
    assert!(user.server_name.is_none());
    let mut session = Session::new();

    h.skill
        .handle_turn(&TurnRequest::intent("OnDeckIntent"), &mut user, &mut session)
        .await;

    assert_eq!(user.server_name.as_deref(), Some("Den Server"));
    assert_eq!(user.player_name.as_deref(), Some("Living Room"));
}

#[tokio::test]
async fn whats_new_answers_in_both_states() {
    let h = harness();
    let mut session = Session::new();

    let mut unlinked = h.new_user("u1").await;
    let resp = h
        .skill
        .handle_turn(&TurnRequest::intent("WhatsNewIntent"), &mut unlinked, &mut session)
        .await;
    assert!(resp.speech.contains("everything is new"));

    let mut linked = h.linked_user("u2").await;
    let resp = h
        .skill
        .handle_turn(&TurnRequest::intent("WhatsNewIntent"), &mut linked, &mut session)
        .await;
    assert!(resp.speech.contains("everything is new"));
}

#[tokio::test]
async fn settings_stub_resets_stale_selections() {
    let h = harness();
    let mut user = h.linked_user("u1").await;
    let mut session = Session::new();

    // Selections pointing at a server and player that are gone
    user.server_name = Some("Old Server".to_string());
    user.server_id = Some("srv-old".to_string());
    user.player_name = Some("Old Player".to_string());
    user.player_id = Some("ply-old".to_string());

    let resp = h
        .skill
        .handle_turn(&TurnRequest::intent("ChangeSettingsIntent"), &mut user, &mut session)
        .await;

    assert!(resp.speech.contains("Den Server"));
    assert!(resp.speech.contains("Living Room"));
    assert_eq!(user.server_id.as_deref(), Some("srv-1"));
}

#[tokio::test]
async fn settings_stub_with_nothing_to_change_says_so() {
    let h = harness();
    let mut user = h.linked_user("u1").await;
    let mut session = Session::new();

    // The setup hook has already picked defaults by the time the handler
    // runs, so a fresh user has nothing left to change.
    let resp = h
        .skill
        .handle_turn(&TurnRequest::intent("ChangeSettingsIntent"), &mut user, &mut session)
        .await;

    assert!(resp.speech.contains("isn't supported"));
}
