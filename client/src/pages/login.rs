//! Login / signup page driving the two-step auth form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `?signup` selects signup mode. The form state machine lives in
//! `state::auth_form`; this page renders it, performs the one network call a
//! `Submission::Dispatch` asks for, and writes the resulting session into the
//! app-owned auth signal. A signed-in user never sees the form: the auth
//! redirect sends them to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::PRODUCT_NAME;
use crate::state::auth::AuthState;
use crate::state::auth_form::{AuthForm, AuthMode, Field, SignupStep, Submission};
use crate::state::nav::{SIGNUP_QUERY, TopView};
use crate::util::auth::install_auth_redirect;
use crate::util::scope::TaskScope;

const ORGANIZATION_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];

const PASSWORD_HINT: &str =
    "At least 8 characters, with upper and lower case letters, a number, and a symbol.";

fn heading(form: &AuthForm) -> &'static str {
    match (form.mode, form.step) {
        (AuthMode::Login, _) => "Welcome back",
        (AuthMode::Signup, SignupStep::Credentials) => "Create your account",
        (AuthMode::Signup, SignupStep::Profile) => "Tell us about your organization",
    }
}

fn step_label(form: &AuthForm) -> Option<&'static str> {
    match (form.mode, form.step) {
        (AuthMode::Login, _) => None,
        (AuthMode::Signup, SignupStep::Credentials) => Some("Step 1 of 2"),
        (AuthMode::Signup, SignupStep::Profile) => Some("Step 2 of 2"),
    }
}

fn submit_label(form: &AuthForm) -> &'static str {
    if form.in_flight {
        return "Please wait...";
    }
    match (form.mode, form.step) {
        (AuthMode::Login, _) => "Sign in",
        (AuthMode::Signup, SignupStep::Credentials) => "Continue",
        (AuthMode::Signup, SignupStep::Profile) => "Create account",
    }
}

fn toggle_prompt(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Don't have an account?", "Sign up"),
        AuthMode::Signup => ("Already have an account?", "Sign in"),
    }
}

#[component]
pub fn LoginPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let query = use_query_map();
    let signup = query.with_untracked(|q| q.get(SIGNUP_QUERY).is_some());
    let form = RwSignal::new(AuthForm::from_signup_flag(signup));
    install_auth_redirect(auth, use_navigate());

    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        let outcome = next.submit();
        form.set(next);
        let Submission::Dispatch(request) = outcome else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let handle = scope.handle();
            log::debug!("auth dispatch: {}", request.path());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_auth(&request).await;
                let Some(result) = handle.keep(result) else {
                    log::debug!("login page gone; discarding auth response");
                    return;
                };
                let mut next = form.get_untracked();
                let session = next.complete(&request, result);
                form.set(next);
                // The auth redirect moves the page on once the session lands.
                if let Some(session) = session {
                    auth.update(|a| a.sign_in(session));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &scope, auth);
        }
    };

    let on_toggle = move |_| form.update(AuthForm::toggle_mode);
    let on_back = move |_| form.update(AuthForm::back);

    view! {
        <div class="login-page">
            <div class="login-card">
                <A href=TopView::Landing.path() attr:class="login-card__brand">{PRODUCT_NAME}</A>
                <h1>{move || form.with(heading)}</h1>
                {move || form.with(step_label).map(|s| view! { <p class="login-card__subtitle">{s}</p> })}
                <form class="login-form" on:submit=on_submit>
                    <Show
                        when=move || form.with(|f| f.step == SignupStep::Credentials)
                        fallback=move || view! { <ProfileStep form=form/> }
                    >
                        <CredentialsStep form=form/>
                    </Show>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <div class="login-form__actions">
                        <Show when=move || form.with(|f| f.mode == AuthMode::Signup && f.step == SignupStep::Profile)>
                            <button class="btn login-button--secondary" type="button" on:click=on_back>
                                "Back"
                            </button>
                        </Show>
                        <button
                            class="login-button"
                            type="submit"
                            disabled=move || form.with(|f| f.in_flight)
                        >
                            {move || form.with(submit_label)}
                        </button>
                    </div>
                </form>
                <p class="login-card__toggle">
                    {move || form.with(|f| toggle_prompt(f.mode).0)}
                    " "
                    <button class="btn btn--link" type="button" on:click=on_toggle>
                        {move || form.with(|f| toggle_prompt(f.mode).1)}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[component]
fn CredentialsStep(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <FieldInput form=form field=Field::Email input_type="email" placeholder="you@example.com" required=true/>
        <FieldInput form=form field=Field::Password input_type="password" required=true/>
        <p class="login-form__hint">{PASSWORD_HINT}</p>
        <Show when=move || form.with(|f| f.mode == AuthMode::Signup)>
            <FieldInput form=form field=Field::FullName placeholder="Ada Lovelace" required=true/>
        </Show>
    }
}

#[component]
fn ProfileStep(form: RwSignal<AuthForm>) -> impl IntoView {
    let sizes = ORGANIZATION_SIZES
        .iter()
        .map(|size| view! { <option value=*size>{*size}</option> })
        .collect::<Vec<_>>();

    view! {
        <FieldInput form=form field=Field::Organization placeholder="University of Somewhere" required=true/>
        <FieldInput form=form field=Field::Role placeholder="Admissions reviewer" required=true/>
        <FieldInput form=form field=Field::Phone input_type="tel" placeholder="Optional"/>
        <FieldInput form=form field=Field::UseCase placeholder="Optional"/>
        <label class="login-form__label">
            {Field::OrganizationSize.label()}
            <select
                class="login-input"
                disabled=move || form.with(|f| f.in_flight)
                prop:value=move || form.with(|f| f.fields.organization_size.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.fields.set(Field::OrganizationSize, value));
                }
            >
                <option value="">"Select..."</option>
                {sizes}
            </select>
        </label>
    }
}

#[component]
fn FieldInput(
    form: RwSignal<AuthForm>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="login-form__label">
            {field.label()}
            <input
                class="login-input"
                type=input_type
                placeholder=placeholder
                required=required
                disabled=move || form.with(|f| f.in_flight)
                prop:value=move || form.with(|f| f.fields.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.fields.set(field, value));
                }
            />
        </label>
    }
}
