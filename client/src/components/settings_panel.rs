//! Account settings view.

use leptos::prelude::*;

use crate::mock::CREDIT_BALANCE;

#[component]
pub fn SettingsPanel(#[prop(into)] email: Signal<String>, on_buy_credits: Callback<()>) -> impl IntoView {
    view! {
        <section class="panel panel--settings">
            <div class="panel__header">
                <h2>"Settings"</h2>
            </div>
            <div class="settings-row">
                <span class="settings-row__label">"Signed in as"</span>
                <span class="settings-row__value">{move || email.get()}</span>
            </div>
            <div class="settings-row">
                <span class="settings-row__label">"Credit balance"</span>
                <span class="settings-row__value">{format!("{CREDIT_BALANCE} credits")}</span>
                <button class="btn btn--small" on:click=move |_| on_buy_credits.run(())>
                    "Buy credits"
                </button>
            </div>
            <div class="settings-row">
                <span class="settings-row__label">"Notifications"</span>
                <label class="settings-row__value">
                    <input type="checkbox" checked=true disabled=true/>
                    " Email me when a submission is flagged"
                </label>
            </div>
        </section>
    }
}
