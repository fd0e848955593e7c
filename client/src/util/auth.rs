//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior: the dashboard bounces
//! signed-out users to `/login`, and `/login` bounces signed-in users to the
//! dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::nav::TopView;

/// True when a guarded view must bounce to the login screen.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Redirect to `/login` whenever no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(TopView::Dashboard.after_logout().path(), NavigateOptions::default());
        }
    });
}

/// True when the login screen must hand a signed-in user to the dashboard.
pub fn should_redirect_auth(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/dashboard` whenever a session is present, including the
/// moment a sign-in completes.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_auth(&auth.get()) {
            navigate(TopView::Login.after_auth().path(), NavigateOptions::default());
        }
    });
}
