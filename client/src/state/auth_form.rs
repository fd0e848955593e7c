//! Two-step signup / login form state machine.
//!
//! DESIGN
//! ======
//! The form is a plain value. `submit` decides what should happen next and
//! returns it as a [`Submission`]; the page performs the network call only for
//! `Submission::Dispatch` and feeds that request and its outcome back through
//! `complete`. This keeps "signup step 1 never hits the network" and "one
//! request per dispatch" checkable without a browser.
//!
//! Field values survive every transition (back, mode toggle, failed
//! submit). Only `error`, `step` and `in_flight` move.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use crate::net::types::{AuthError, AuthRequest, LoginRequest, RegisterRequest};
use crate::state::auth::Session;

/// Whether the user is signing in or creating an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Signup progress. Login always stays on `Credentials`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupStep {
    #[default]
    Credentials,
    Profile,
}

/// Every input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    FullName,
    Organization,
    Role,
    Phone,
    UseCase,
    OrganizationSize,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::FullName => "Full name",
            Self::Organization => "Organization",
            Self::Role => "Role",
            Self::Phone => "Phone number",
            Self::UseCase => "Use case",
            Self::OrganizationSize => "Organization size",
        }
    }
}

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub organization: String,
    pub role: String,
    pub phone: String,
    pub use_case: String,
    pub organization_size: String,
}

impl AuthFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::FullName => &self.full_name,
            Field::Organization => &self.organization,
            Field::Role => &self.role,
            Field::Phone => &self.phone,
            Field::UseCase => &self.use_case,
            Field::OrganizationSize => &self.organization_size,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::FullName => &mut self.full_name,
            Field::Organization => &mut self.organization,
            Field::Role => &mut self.role,
            Field::Phone => &mut self.phone,
            Field::UseCase => &mut self.use_case,
            Field::OrganizationSize => &mut self.organization_size,
        };
        *slot = value;
    }
}

/// What the page should do after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight; nothing changed.
    Ignored,
    /// A required field is empty; `error` now names it.
    Invalid,
    /// Signup moved from credentials to profile without a request.
    Advanced,
    /// Send exactly this request and report back through `complete`.
    Dispatch(AuthRequest),
}

/// Full form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub step: SignupStep,
    pub fields: AuthFields,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Initial form for the `/login` route: `?signup` selects signup.
    pub fn from_signup_flag(signup: bool) -> Self {
        Self::new(if signup { AuthMode::Signup } else { AuthMode::Login })
    }

    /// Fields that must be non-blank before the current step can submit.
    pub fn required_fields(&self) -> &'static [Field] {
        match (self.mode, self.step) {
            (AuthMode::Login, _) => &[Field::Email, Field::Password],
            (AuthMode::Signup, SignupStep::Credentials) => &[Field::Email, Field::Password, Field::FullName],
            (AuthMode::Signup, SignupStep::Profile) => &[Field::Organization, Field::Role],
        }
    }

    pub fn submit(&mut self) -> Submission {
        if self.in_flight {
            return Submission::Ignored;
        }
        if let Some(missing) = self
            .required_fields()
            .iter()
            .find(|f| self.fields.get(**f).trim().is_empty())
        {
            self.error = Some(format!("{} is required.", missing.label()));
            return Submission::Invalid;
        }
        self.error = None;
        if self.mode == AuthMode::Signup && self.step == SignupStep::Credentials {
            self.step = SignupStep::Profile;
            return Submission::Advanced;
        }
        self.in_flight = true;
        Submission::Dispatch(self.build_request())
    }

    /// Apply the outcome of `request`, the one `submit` dispatched. Returns
    /// the new session on success; the step is left where it was either way.
    ///
    /// The session identity is the email that was sent, not whatever the
    /// input holds now.
    pub fn complete(&mut self, request: &AuthRequest, result: Result<String, AuthError>) -> Option<Session> {
        self.in_flight = false;
        let outcome =
            result.and_then(|token| Session::new(request.email(), token).ok_or(AuthError::Failed));
        match outcome {
            Ok(session) => {
                self.error = None;
                Some(session)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Signup step 2 back to step 1.
    pub fn back(&mut self) {
        if self.mode == AuthMode::Signup && self.step == SignupStep::Profile {
            self.step = SignupStep::Credentials;
            self.error = None;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.step = SignupStep::Credentials;
        self.error = None;
    }

    fn build_request(&self) -> AuthRequest {
        let f = &self.fields;
        let email = f.email.trim().to_owned();
        match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest {
                email,
                password: f.password.clone(),
            }),
            AuthMode::Signup => AuthRequest::Register(RegisterRequest {
                email,
                password: f.password.clone(),
                full_name: f.full_name.trim().to_owned(),
                organization: f.organization.trim().to_owned(),
                role: f.role.trim().to_owned(),
                phone_number: non_blank(&f.phone),
                use_case: non_blank(&f.use_case),
                organization_size: non_blank(&f.organization_size),
            }),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
