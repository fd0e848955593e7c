//! Dashboard landing view: headline stats, forms, and recent submissions.

use leptos::prelude::*;

use super::forms_table::FormsTable;
use super::stat_card::StatCard;
use super::submissions_table::SubmissionsTable;
use crate::mock;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn OverviewPanel(on_analyze: Callback<String>, on_connect: Callback<()>) -> impl IntoView {
    let stats = mock::overview_stats();

    view! {
        <section class="panel panel--overview">
            <div class="panel__header">
                <h2>"Overview"</h2>
                <button class="btn btn--primary" on:click=move |_| on_connect.run(())>
                    "+ Connect form"
                </button>
            </div>
            <div class="stat-grid">
                <StatCard label="Forms connected" value=stats.forms.to_string()/>
                <StatCard label="Total responses" value=stats.responses.to_string()/>
                <StatCard label="Flagged" value=stats.flagged.to_string() hint="Plagiarism or AI risk"/>
                <StatCard label="Avg. quality" value=format!("{}%", stats.avg_quality)/>
                <StatCard label="Credits" value=stats.credits.to_string()/>
            </div>
            <h3 class="panel__subtitle">"Your forms"</h3>
            <FormsTable forms=mock::FORMS.iter().collect() on_analyze=on_analyze/>
            <h3 class="panel__subtitle">"Recent submissions"</h3>
            <SubmissionsTable submissions=mock::recent_submissions(RECENT_LIMIT)/>
        </section>
    }
}
