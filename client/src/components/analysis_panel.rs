//! Per-form analysis: summary cards and the form's submissions.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::stat_card::StatCard;
use super::submissions_table::SubmissionsTable;
use crate::mock;

/// Analysis for one form. The navigator only opens this view for ids that
/// exist, so a failed lookup renders nothing.
#[component]
pub fn AnalysisPanel(form_id: String, on_open: Callback<String>, on_back: Callback<()>) -> impl IntoView {
    let Some(form) = mock::find_form(&form_id) else {
        return ().into_any();
    };
    let submissions = mock::submissions_for(form.id);

    view! {
        <section class="panel panel--analysis">
            <div class="panel__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>"← Back"</button>
                <h2>{form.name}</h2>
                <span class="platform-tag">{form.platform.label()}</span>
                <span class="toolbar__spacer"></span>
                <button class="btn" disabled=true title="CSV export is not available yet">
                    "Export CSV"
                </button>
            </div>
            <div class="stat-grid">
                <StatCard label="Responses" value=form.responses.to_string()/>
                <StatCard label="Flagged" value=form.flagged.to_string()/>
                <StatCard label="Avg. quality" value=format!("{}%", form.avg_quality)/>
                <StatCard label="Last sync" value=form.last_synced.to_owned()/>
            </div>
            <h3 class="panel__subtitle">"Submissions"</h3>
            <SubmissionsTable submissions=submissions on_open=on_open/>
        </section>
    }
    .into_any()
}
