//! Table of connected forms with an analyze action per row.

use leptos::prelude::*;

use super::score_badge::{ScoreBadge, ScoreKind};
use crate::mock::MockForm;

#[component]
pub fn FormsTable(forms: Vec<&'static MockForm>, on_analyze: Callback<String>) -> impl IntoView {
    let rows = forms
        .into_iter()
        .map(|form| {
            let platform_class = format!("platform-tag platform-tag--{}", form.platform.css_modifier());
            view! {
                <tr class="data-table__row">
                    <td class="data-table__cell data-table__cell--name">{form.name}</td>
                    <td class="data-table__cell">
                        <span class=platform_class>{form.platform.label()}</span>
                    </td>
                    <td class="data-table__cell data-table__cell--num">{form.responses.to_string()}</td>
                    <td class="data-table__cell data-table__cell--num">{form.flagged.to_string()}</td>
                    <td class="data-table__cell">
                        <ScoreBadge score=form.avg_quality kind=ScoreKind::Quality/>
                    </td>
                    <td class="data-table__cell data-table__cell--muted">{form.last_synced}</td>
                    <td class="data-table__cell">
                        <button class="btn btn--small" on:click=move |_| on_analyze.run(form.id.to_owned())>
                            "View analysis"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Form"</th>
                    <th>"Platform"</th>
                    <th>"Responses"</th>
                    <th>"Flagged"</th>
                    <th>"Avg. quality"</th>
                    <th>"Last sync"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
