//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root `App` and handed to each page as a prop. The login page
//! writes it, the dashboard reads it and clears it on logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// An authenticated identity: the email that signed in and its access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    email: String,
    token: String,
}

impl Session {
    /// Build a session. Both parts must be non-blank, so a session is never
    /// half-populated.
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Option<Self> {
        let email = email.into();
        let token = token.into();
        if email.trim().is_empty() || token.trim().is_empty() {
            return None;
        }
        Some(Self { email, token })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Authentication state: either signed in with a [`Session`] or signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    /// Email of the signed-in user, if any.
    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().map(Session::email)
    }
}
