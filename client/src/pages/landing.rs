//! Marketing landing page. Also the fallback for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::PRODUCT_NAME;
use crate::state::nav::{TopView, signup_href};

const FEATURES: &[(&str, &str)] = &[
    (
        "Plagiarism detection",
        "Compare every response against published sources and the rest of the submission pool.",
    ),
    (
        "AI-content detection",
        "Estimate how likely a response was machine-written, with per-passage highlights.",
    ),
    (
        "Quality scoring",
        "Rank submissions by clarity, relevance, and depth so reviewers start with the best.",
    ),
    (
        "Form integrations",
        "Connect Google Forms, Microsoft Forms, or Typeform and keep responses in sync.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    ("Connect", "Link the form you already use to collect submissions."),
    ("Screen", "Every new response is scored as it arrives."),
    ("Review", "Open flagged submissions first and export the shortlist."),
];

const PLANS: &[(&str, &str, &str)] = &[
    ("Starter", "Free", "100 credits / month"),
    ("Team", "$49 / mo", "5,000 credits / month"),
    ("Institution", "Contact us", "Unlimited forms and seats"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let features = FEATURES
        .iter()
        .map(|(title, body)| {
            view! {
                <article class="feature-card">
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, body))| {
            view! {
                <li class="how-step">
                    <span class="how-step__index">{(i + 1).to_string()}</span>
                    <strong>{*title}</strong>
                    <p>{*body}</p>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let plans = PLANS
        .iter()
        .map(|(name, price, detail)| {
            view! {
                <article class="plan-card">
                    <h3>{*name}</h3>
                    <p class="plan-card__price">{*price}</p>
                    <p class="plan-card__detail">{*detail}</p>
                    <A href=signup_href() attr:class="btn">"Get started"</A>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="landing-page">
            <header class="landing-nav">
                <span class="landing-nav__brand">{PRODUCT_NAME}</span>
                <span class="toolbar__spacer"></span>
                <A href=TopView::Login.path() attr:class="btn btn--ghost">"Sign in"</A>
                <A href=signup_href() attr:class="btn btn--primary">"Start free"</A>
            </header>

            <section class="landing-hero">
                <h1>"Screen every submission before you read it."</h1>
                <p>
                    "Plagiarism, AI-content, and quality checks for applications, essays, and "
                    "proposals collected through the forms you already use."
                </p>
                <A href=signup_href() attr:class="btn btn--primary btn--large">"Create an account"</A>
            </section>

            <section class="landing-features">{features}</section>

            <section class="landing-how">
                <h2>"How it works"</h2>
                <ol class="how-steps">{steps}</ol>
            </section>

            <section class="landing-pricing">
                <h2>"Pricing"</h2>
                <div class="plan-grid">{plans}</div>
            </section>

            <footer class="landing-footer">
                <span>{format!("© {PRODUCT_NAME}")}</span>
            </footer>
        </div>
    }
}
