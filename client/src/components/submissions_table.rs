//! Table of submissions with their three scores.

#[cfg(test)]
#[path = "submissions_table_test.rs"]
mod submissions_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::score_badge::{ScoreBadge, ScoreKind};
use crate::mock::MockSubmission;

fn row_class(clickable: bool, flagged: bool) -> String {
    let mut class = String::from("data-table__row");
    if clickable {
        class.push_str(" data-table__row--clickable");
    }
    if flagged {
        class.push_str(" data-table__row--flagged");
    }
    class
}

/// Submissions table. Rows become clickable when `on_open` is given.
#[component]
pub fn SubmissionsTable(
    submissions: Vec<&'static MockSubmission>,
    #[prop(optional)] on_open: Option<Callback<String>>,
) -> impl IntoView {
    if submissions.is_empty() {
        return view! { <p class="data-table__empty">"No submissions yet."</p> }.into_any();
    }

    let rows = submissions
        .into_iter()
        .map(|sub| {
            let open = move |_| {
                if let Some(cb) = on_open {
                    cb.run(sub.id.to_owned());
                }
            };
            view! {
                <tr class=row_class(on_open.is_some(), sub.is_flagged()) on:click=open>
                    <td class="data-table__cell">{sub.respondent}</td>
                    <td class="data-table__cell data-table__cell--muted">{sub.submitted_at}</td>
                    <td class="data-table__cell"><ScoreBadge score=sub.plagiarism kind=ScoreKind::Risk/></td>
                    <td class="data-table__cell"><ScoreBadge score=sub.ai_likelihood kind=ScoreKind::Risk/></td>
                    <td class="data-table__cell"><ScoreBadge score=sub.quality kind=ScoreKind::Quality/></td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Respondent"</th>
                    <th>"Submitted"</th>
                    <th>"Plagiarism"</th>
                    <th>"AI likelihood"</th>
                    <th>"Quality"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
