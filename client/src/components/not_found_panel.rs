//! Shown when a drill-down targets an id the catalog does not have.

use leptos::prelude::*;

use crate::state::nav::MissingRecord;

#[component]
pub fn NotFoundPanel(missing: MissingRecord, on_back: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel panel--not-found">
            <h2>"Not found"</h2>
            <p>{missing.describe()}</p>
            <button class="btn" on:click=move |_| on_back.run(())>"Back"</button>
        </section>
    }
}
