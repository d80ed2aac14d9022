use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::api::{ApiClient, DASHBOARD_PATH, LOGOUT_PATH, NOTES_PATH, VERIFY_PATH};
use crate::net::transport::Method;
use crate::services::auth_strategy::AuthStrategy;
use crate::state::session::SessionPhase;
use crate::state::token_store::MemoryTokenStore;
use crate::test_helpers::{MemoryNavigator, MockTransport, TEST_BASE_URL, sample_snapshot, snapshot_json};

type Controller = SessionController<MockTransport, MemoryTokenStore, MemoryNavigator>;

fn signed_in() -> (MockTransport, MemoryTokenStore, Controller) {
    let transport = MockTransport::new();
    let store = MemoryTokenStore::with_tokens("acc", Some("ref"));
    let api = ApiClient::new(transport.clone(), TEST_BASE_URL);
    let controller =
        SessionController::new(api, store.clone(), MemoryNavigator::at("http://dash.test/"), AuthStrategy::Direct);
    transport.respond(Method::Get, VERIFY_PATH, 200, json!({"valid": true}));
    transport.respond(Method::Get, DASHBOARD_PATH, 200, snapshot_json(&sample_snapshot()));
    block_on(controller.start());
    (transport, store, controller)
}

fn note_json(id: i64, title: &str) -> serde_json::Value {
    json!({"id": id, "title": title, "content": "reserved for edge", "cloud_name": "vcd", "tags": []})
}

fn form(title: &str) -> NoteForm {
    NoteForm { title: title.to_owned(), content: "reserved for edge".to_owned(), ..NoteForm::default() }
}

#[test]
fn load_notes_sends_filter_and_bearer() {
    let (transport, _, controller) = signed_in();
    transport.respond(Method::Get, NOTES_PATH, 200, json!([note_json(1, "Edge range")]));
    let filter = NotesFilter { search: "edge".to_owned(), cloud: "vcd".to_owned() };

    let notes = block_on(controller.load_notes(&filter)).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Edge range");

    let request = &transport.requests_to(NOTES_PATH)[0];
    assert_eq!(request.bearer.as_deref(), Some("acc"));
    assert_eq!(
        request.query,
        vec![("cloud_name".to_owned(), "vcd".to_owned()), ("search".to_owned(), "edge".to_owned())]
    );
}

#[test]
fn create_posts_payload_then_reloads() {
    let (transport, _, controller) = signed_in();
    transport.respond(Method::Post, NOTES_PATH, 200, note_json(5, "New"));
    transport.respond(Method::Get, NOTES_PATH, 200, json!([note_json(5, "New")]));

    let notes = block_on(controller.save_note(&form("New"), &NotesFilter::default())).unwrap();
    assert_eq!(notes[0].id, 5);

    let create = transport.requests().into_iter().find(|r| r.method == Method::Post).unwrap();
    assert_eq!(
        create.body,
        Some(json!({
            "title": "New",
            "content": "reserved for edge",
            "ip_address": null,
            "cloud_name": null,
            "pool_name": null
        }))
    );
}

#[test]
fn editing_form_updates_by_id() {
    let (transport, _, controller) = signed_in();
    transport.respond(Method::Put, "/api/notes/7", 200, note_json(7, "Renamed"));
    transport.respond(Method::Get, NOTES_PATH, 200, json!([note_json(7, "Renamed")]));

    let mut edit = form("Renamed");
    edit.editing_id = Some(7);
    block_on(controller.save_note(&edit, &NotesFilter::default())).unwrap();
    assert_eq!(transport.requests_to("/api/notes/7").len(), 1);
}

#[test]
fn invalid_form_sends_nothing() {
    let (transport, _, controller) = signed_in();
    let before = transport.requests().len();
    let err = block_on(controller.save_note(&form("  "), &NotesFilter::default())).unwrap_err();
    assert_eq!(err, NotesError::Invalid("Title and content are required."));
    assert_eq!(transport.requests().len(), before);
}

#[test]
fn delete_then_reload() {
    let (transport, _, controller) = signed_in();
    transport.respond(Method::Delete, "/api/notes/3", 200, json!({"message": "deleted"}));
    transport.respond(Method::Get, NOTES_PATH, 200, json!([]));
    let notes = block_on(controller.delete_note(3, &NotesFilter::default())).unwrap();
    assert!(notes.is_empty());
}

#[test]
fn failures_map_to_notes_messages() {
    let (transport, _, controller) = signed_in();
    transport.respond(Method::Delete, "/api/notes/3", 404, json!({"detail": "Note not found"}));
    let err = block_on(controller.delete_note(3, &NotesFilter::default())).unwrap_err();
    assert_eq!(err.user_message(), "Note not found");

    transport.respond(Method::Get, NOTES_PATH, 500, json!({}));
    let err = block_on(controller.load_notes(&NotesFilter::default())).unwrap_err();
    assert_eq!(err.user_message(), "Failed to load notes.");
    assert!(controller.session().is_authenticated());
}

#[test]
fn unauthorized_notes_call_signs_out() {
    let (transport, store, controller) = signed_in();
    transport.respond(Method::Get, NOTES_PATH, 401, json!({}));
    transport.respond(Method::Post, LOGOUT_PATH, 200, json!({}));

    let err = block_on(controller.load_notes(&NotesFilter::default())).unwrap_err();
    assert!(matches!(err, NotesError::Load(ApiError::Unauthorized(_))));
    assert_eq!(controller.session().phase(), SessionPhase::Unauthenticated);
    assert!(store.is_empty());
}
