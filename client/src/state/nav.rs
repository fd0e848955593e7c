//! View selectors for the app and the dashboard.
//!
//! DESIGN
//! ======
//! `TopView` maps URL paths onto the three top-level screens. `DashboardView`
//! is the dashboard's closed set of views; detail identifiers live inside
//! their variant so leaving a detail view drops the identifier with it, and
//! every identifier is checked against the mock catalog before a detail view
//! is entered.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::mock;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SIGNUP_QUERY: &str = "signup";

/// Top-level screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopView {
    #[default]
    Landing,
    Login,
    Dashboard,
}

impl TopView {
    /// Resolve a URL path. Anything unmatched lands on the marketing page.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            _ => Self::Landing,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => LANDING_PATH,
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
        }
    }

    /// Where a successful sign-in goes.
    pub fn after_auth(self) -> Self {
        match self {
            Self::Login => Self::Dashboard,
            other => other,
        }
    }

    /// Where logging out goes.
    pub fn after_logout(self) -> Self {
        match self {
            Self::Dashboard => Self::Login,
            other => other,
        }
    }
}

/// Link target for the signup variant of the login screen.
pub fn signup_href() -> String {
    format!("{LOGIN_PATH}?{SIGNUP_QUERY}=1")
}

/// Sibling views selected from the dashboard nav bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    Forms,
    Settings,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Forms, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Forms => "Forms",
            Self::Settings => "Settings",
        }
    }
}

/// An identifier that did not resolve against the mock catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissingRecord {
    Form(String),
    Submission(String),
}

impl MissingRecord {
    pub fn describe(&self) -> String {
        match self {
            Self::Form(id) => format!("No form with id \"{id}\"."),
            Self::Submission(id) => format!("No submission with id \"{id}\" in this form."),
        }
    }
}

/// Which dashboard view is on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Section(Section),
    Analysis {
        form_id: String,
        from: Section,
    },
    Submission {
        form_id: String,
        submission_id: String,
        from: Section,
    },
    NotFound {
        missing: MissingRecord,
        from: Section,
    },
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::Section(Section::Overview)
    }
}

impl DashboardView {
    /// Nav-bar section to highlight.
    pub fn section(&self) -> Section {
        match self {
            Self::Section(s) => *s,
            Self::Analysis { from, .. } | Self::Submission { from, .. } | Self::NotFound { from, .. } => *from,
        }
    }

    pub fn select(&self, section: Section) -> Self {
        Self::Section(section)
    }

    /// Drill into a form's analysis, or `NotFound` if the id is unknown.
    pub fn open_analysis(&self, form_id: &str) -> Self {
        let from = self.section();
        match mock::find_form(form_id) {
            Some(form) => Self::Analysis {
                form_id: form.id.to_owned(),
                from,
            },
            None => Self::NotFound {
                missing: MissingRecord::Form(form_id.to_owned()),
                from,
            },
        }
    }

    /// Drill into a submission of the form under analysis. Only valid from
    /// `Analysis`; other views are returned unchanged.
    pub fn open_submission(&self, submission_id: &str) -> Self {
        let Self::Analysis { form_id, from } = self else {
            return self.clone();
        };
        match mock::find_submission(form_id, submission_id) {
            Some(sub) => Self::Submission {
                form_id: form_id.clone(),
                submission_id: sub.id.to_owned(),
                from: *from,
            },
            None => Self::NotFound {
                missing: MissingRecord::Submission(submission_id.to_owned()),
                from: *from,
            },
        }
    }

    /// Manual reverse transition: submission to its analysis, analysis and
    /// not-found to the section they were entered from.
    pub fn back(&self) -> Self {
        match self {
            Self::Submission { form_id, from, .. } => Self::Analysis {
                form_id: form_id.clone(),
                from: *from,
            },
            Self::Analysis { from, .. } | Self::NotFound { from, .. } => Self::Section(*from),
            Self::Section(s) => Self::Section(*s),
        }
    }
}
