//! Dashboard header with section tabs, identity, and logout.

use leptos::prelude::*;

use crate::config::PRODUCT_NAME;
use crate::state::nav::Section;

fn tab_class(is_active: bool) -> &'static str {
    if is_active { "dashboard-nav__tab dashboard-nav__tab--active" } else { "dashboard-nav__tab" }
}

#[component]
pub fn DashboardNav(
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] email: Signal<String>,
    on_select: Callback<Section>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let tabs = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class=move || tab_class(active.get() == section) on:click=move |_| on_select.run(section)>
                    {section.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="dashboard-nav toolbar">
            <span class="dashboard-nav__brand">{PRODUCT_NAME}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="dashboard-nav__tabs">{tabs}</nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{move || email.get()}</span>
            <button class="btn toolbar__logout" on:click=move |_| on_logout.run(()) title="Logout">
                "Logout"
            </button>
        </header>
    }
}
