//! Forms view: every connected form with sync and connect affordances.

use leptos::prelude::*;

use super::forms_table::FormsTable;
use crate::mock;

#[component]
pub fn FormsPanel(on_analyze: Callback<String>, on_connect: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel panel--forms">
            <div class="panel__header">
                <h2>"Forms"</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn" disabled=true title="Sync runs automatically">"Sync now"</button>
                <button class="btn btn--primary" on:click=move |_| on_connect.run(())>
                    "+ Connect form"
                </button>
            </div>
            <FormsTable forms=mock::FORMS.iter().collect() on_analyze=on_analyze/>
        </section>
    }
}
