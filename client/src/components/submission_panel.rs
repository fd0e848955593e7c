//! Single submission with its score breakdown.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::score_badge::{ScoreBadge, ScoreKind};
use crate::mock;

#[component]
pub fn SubmissionPanel(form_id: String, submission_id: String, on_back: Callback<()>) -> impl IntoView {
    let Some(sub) = mock::find_submission(&form_id, &submission_id) else {
        return ().into_any();
    };
    let form_name = mock::find_form(sub.form_id).map_or("", |f| f.name);

    let scores = [
        ("Plagiarism", sub.plagiarism, ScoreKind::Risk),
        ("AI likelihood", sub.ai_likelihood, ScoreKind::Risk),
        ("Quality", sub.quality, ScoreKind::Quality),
    ]
    .into_iter()
    .map(|(label, score, kind)| {
        view! {
            <div class="score-row">
                <span class="score-row__label">{label}</span>
                <div class="score-row__bar">
                    <div class="score-row__fill" style=format!("width: {score}%")></div>
                </div>
                <ScoreBadge score=score kind=kind/>
            </div>
        }
    })
    .collect::<Vec<_>>();

    view! {
        <section class="panel panel--submission">
            <div class="panel__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>"← Back"</button>
                <h2>{sub.respondent}</h2>
                <span class="panel__meta">{format!("{form_name} · {}", sub.submitted_at)}</span>
            </div>
            <Show when=move || sub.is_flagged()>
                <p class="panel__warning">"Flagged for review"</p>
            </Show>
            <div class="score-breakdown">{scores}</div>
            <h3 class="panel__subtitle">"Response"</h3>
            <blockquote class="submission-excerpt">{sub.excerpt}</blockquote>
        </section>
    }
    .into_any()
}
