//! Static mock catalog behind every dashboard screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here is fetched or mutated. The dashboard navigator validates
//! identifiers against these tables before opening a detail view.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Where a form's responses are collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    GoogleForms,
    MicrosoftForms,
    Typeform,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Self::GoogleForms => "Google Forms",
            Self::MicrosoftForms => "Microsoft Forms",
            Self::Typeform => "Typeform",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::GoogleForms => "google",
            Self::MicrosoftForms => "microsoft",
            Self::Typeform => "typeform",
        }
    }
}

/// Risk banding for a 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    /// Band a risk score (plagiarism, AI likelihood): higher is worse.
    pub fn for_risk(score: u8) -> Self {
        match score {
            0..=29 => Self::Low,
            30..=69 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Band a quality score: lower is worse, so the scale is inverted.
    pub fn for_quality(score: u8) -> Self {
        Self::for_risk(100u8.saturating_sub(score.min(100)))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "score-badge score-badge--low",
            Self::Medium => "score-badge score-badge--medium",
            Self::High => "score-badge score-badge--high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockForm {
    pub id: &'static str,
    pub name: &'static str,
    pub platform: Platform,
    pub responses: u32,
    pub flagged: u32,
    pub avg_quality: u8,
    pub last_synced: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockSubmission {
    pub id: &'static str,
    pub form_id: &'static str,
    pub respondent: &'static str,
    pub submitted_at: &'static str,
    pub plagiarism: u8,
    pub ai_likelihood: u8,
    pub quality: u8,
    pub excerpt: &'static str,
}

impl MockSubmission {
    /// A submission is flagged when either risk score lands in the high band.
    pub fn is_flagged(&self) -> bool {
        ScoreBand::for_risk(self.plagiarism) == ScoreBand::High
            || ScoreBand::for_risk(self.ai_likelihood) == ScoreBand::High
    }
}

/// Headline numbers for the overview stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewStats {
    pub forms: usize,
    pub responses: u32,
    pub flagged: u32,
    pub avg_quality: u8,
    pub credits: u32,
}

pub const CREDIT_BALANCE: u32 = 2_450;

pub const FORMS: &[MockForm] = &[
    MockForm {
        id: "1",
        name: "Scholarship Essay 2025",
        platform: Platform::GoogleForms,
        responses: 342,
        flagged: 27,
        avg_quality: 78,
        last_synced: "2 hours ago",
    },
    MockForm {
        id: "2",
        name: "Engineering Internship Application",
        platform: Platform::Typeform,
        responses: 1_208,
        flagged: 96,
        avg_quality: 71,
        last_synced: "15 minutes ago",
    },
    MockForm {
        id: "3",
        name: "Grant Proposal Round B",
        platform: Platform::MicrosoftForms,
        responses: 87,
        flagged: 12,
        avg_quality: 82,
        last_synced: "Yesterday",
    },
    MockForm {
        id: "4",
        name: "Writing Fellowship Statement",
        platform: Platform::GoogleForms,
        responses: 519,
        flagged: 41,
        avg_quality: 74,
        last_synced: "3 days ago",
    },
];

pub const SUBMISSIONS: &[MockSubmission] = &[
    MockSubmission {
        id: "s-101",
        form_id: "1",
        respondent: "jordan.lee@example.edu",
        submitted_at: "2025-03-02 14:21",
        plagiarism: 8,
        ai_likelihood: 12,
        quality: 88,
        excerpt: "Growing up in a town without a public library taught me to treat every borrowed book as a promise.",
    },
    MockSubmission {
        id: "s-102",
        form_id: "1",
        respondent: "priya.n@example.edu",
        submitted_at: "2025-03-02 16:05",
        plagiarism: 74,
        ai_likelihood: 41,
        quality: 52,
        excerpt: "Education is the most powerful weapon which you can use to change the world, and I intend to.",
    },
    MockSubmission {
        id: "s-103",
        form_id: "1",
        respondent: "m.okafor@example.edu",
        submitted_at: "2025-03-03 09:47",
        plagiarism: 15,
        ai_likelihood: 91,
        quality: 64,
        excerpt: "In today's rapidly evolving landscape, it is essential to leverage multifaceted opportunities.",
    },
    MockSubmission {
        id: "s-201",
        form_id: "2",
        respondent: "sam.ritter@example.com",
        submitted_at: "2025-02-27 11:12",
        plagiarism: 5,
        ai_likelihood: 22,
        quality: 81,
        excerpt: "I rebuilt our robotics team's telemetry stack after the old one dropped packets mid-match.",
    },
    MockSubmission {
        id: "s-202",
        form_id: "2",
        respondent: "h.tanaka@example.com",
        submitted_at: "2025-02-28 18:30",
        plagiarism: 33,
        ai_likelihood: 58,
        quality: 69,
        excerpt: "My passion for engineering began when I disassembled a radio and could not put it back together.",
    },
    MockSubmission {
        id: "s-301",
        form_id: "3",
        respondent: "lab@riverside.org",
        submitted_at: "2025-01-19 10:00",
        plagiarism: 11,
        ai_likelihood: 9,
        quality: 92,
        excerpt: "We propose a two-year field study of watershed restoration across three partner counties.",
    },
    MockSubmission {
        id: "s-302",
        form_id: "3",
        respondent: "grants@northwind.org",
        submitted_at: "2025-01-20 15:44",
        plagiarism: 82,
        ai_likelihood: 18,
        quality: 47,
        excerpt: "Climate change is one of the defining challenges of our time, requiring coordinated action.",
    },
    MockSubmission {
        id: "s-401",
        form_id: "4",
        respondent: "r.alvarez@example.net",
        submitted_at: "2025-02-11 08:15",
        plagiarism: 19,
        ai_likelihood: 27,
        quality: 85,
        excerpt: "My grandmother wrote letters she never sent; I write to finish the conversations she started.",
    },
];

pub fn find_form(id: &str) -> Option<&'static MockForm> {
    FORMS.iter().find(|f| f.id == id)
}

/// Submissions collected by one form, in submission order.
pub fn submissions_for(form_id: &str) -> Vec<&'static MockSubmission> {
    SUBMISSIONS.iter().filter(|s| s.form_id == form_id).collect()
}

/// Look up a submission inside a specific form.
pub fn find_submission(form_id: &str, submission_id: &str) -> Option<&'static MockSubmission> {
    SUBMISSIONS
        .iter()
        .find(|s| s.form_id == form_id && s.id == submission_id)
}

/// Most recent submissions across all forms, newest first.
pub fn recent_submissions(limit: usize) -> Vec<&'static MockSubmission> {
    let mut all: Vec<_> = SUBMISSIONS.iter().collect();
    all.sort_by(|a, b| b.submitted_at.cmp(a.submitted_at));
    all.truncate(limit);
    all
}

pub fn overview_stats() -> OverviewStats {
    let responses = FORMS.iter().map(|f| f.responses).sum::<u32>();
    let flagged = FORMS.iter().map(|f| f.flagged).sum::<u32>();
    let weighted = FORMS
        .iter()
        .map(|f| u64::from(f.avg_quality) * u64::from(f.responses))
        .sum::<u64>();
    let avg_quality = if responses == 0 {
        0
    } else {
        u8::try_from(weighted / u64::from(responses)).unwrap_or(100)
    };
    OverviewStats {
        forms: FORMS.len(),
        responses,
        flagged,
        avg_quality,
        credits: CREDIT_BALANCE,
    }
}
