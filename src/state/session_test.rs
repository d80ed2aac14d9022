use super::*;

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = Session::default();
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn authenticate_sets_tokens_and_user() {
    let mut session = Session::default();
    session.set_error(Some("old".to_owned()));
    session.authenticate("a1".to_owned(), Some("r1".to_owned()), Some("admin".to_owned()));
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), Some("a1"));
    assert_eq!(session.refresh_token(), Some("r1"));
    assert_eq!(session.current_user(), Some("admin"));
    assert_eq!(session.error(), None);
}

#[test]
fn begin_callback_drops_tokens() {
    let mut session = Session::default();
    session.authenticate("a1".to_owned(), None, None);
    session.begin_callback();
    assert_eq!(session.phase(), SessionPhase::CallbackPending);
    assert!(session.access_token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn replace_tokens_keeps_refresh_when_absent() {
    let mut session = Session::default();
    session.authenticate("a1".to_owned(), Some("r1".to_owned()), None);
    session.replace_tokens("a2".to_owned(), None);
    assert_eq!(session.access_token(), Some("a2"));
    assert_eq!(session.refresh_token(), Some("r1"));

    session.replace_tokens("a3".to_owned(), Some("r2".to_owned()));
    assert_eq!(session.refresh_token(), Some("r2"));
}

#[test]
fn replace_tokens_ignored_when_signed_out() {
    let mut session = Session::default();
    session.replace_tokens("a1".to_owned(), Some("r1".to_owned()));
    assert!(session.access_token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn sign_out_clears_everything_but_error() {
    let mut session = Session::default();
    session.authenticate("a1".to_owned(), Some("r1".to_owned()), Some("admin".to_owned()));
    session.sign_out(Some("Session expired".to_owned()));
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    assert!(session.access_token().is_none());
    assert!(session.refresh_token().is_none());
    assert!(session.current_user().is_none());
    assert_eq!(session.error(), Some("Session expired"));
}
