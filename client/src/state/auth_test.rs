use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_requires_both_email_and_token() {
    assert!(Session::new("a@b.com", "tok").is_some());
    assert!(Session::new("", "tok").is_none());
    assert!(Session::new("a@b.com", "   ").is_none());
}

#[test]
fn session_exposes_its_parts() {
    let session = Session::new("a@b.com", "tok-9").unwrap();
    assert_eq!(session.email(), "a@b.com");
    assert_eq!(session.token(), "tok-9");
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.email(), None);
}

#[test]
fn sign_in_then_sign_out_round_trips() {
    let mut state = AuthState::default();
    state.sign_in(Session::new("a@b.com", "tok").unwrap());
    assert!(state.is_authenticated());
    assert_eq!(state.email(), Some("a@b.com"));

    state.sign_out();
    assert!(!state.is_authenticated());
    assert_eq!(state, AuthState::default());
}
