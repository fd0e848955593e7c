//! Dashboard shell: nav bar plus exactly one of the dashboard views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Redirects to `/login` while no session is present.
//! View selection is a single `DashboardView` signal; child components only
//! report navigation intents through callbacks.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::analysis_panel::AnalysisPanel;
use crate::components::dashboard_nav::DashboardNav;
use crate::components::forms_panel::FormsPanel;
use crate::components::inert_modals::{BuyCreditsModal, ConnectFormModal};
use crate::components::not_found_panel::NotFoundPanel;
use crate::components::overview_panel::OverviewPanel;
use crate::components::settings_panel::SettingsPanel;
use crate::components::submission_panel::SubmissionPanel;
use crate::state::auth::AuthState;
use crate::state::nav::{DashboardView, Section};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage(auth: RwSignal<AuthState>) -> impl IntoView {
    install_unauth_redirect(auth, use_navigate());

    let current = RwSignal::new(DashboardView::default());
    let show_connect = RwSignal::new(false);
    let show_credits = RwSignal::new(false);

    let on_select = Callback::new(move |section: Section| current.update(|v| *v = v.select(section)));
    let on_analyze = Callback::new(move |form_id: String| current.update(|v| *v = v.open_analysis(&form_id)));
    let on_open_submission =
        Callback::new(move |submission_id: String| current.update(|v| *v = v.open_submission(&submission_id)));
    let on_back = Callback::new(move |()| current.update(|v| *v = v.back()));
    let on_connect = Callback::new(move |()| show_connect.set(true));
    let on_connect_close = Callback::new(move |()| show_connect.set(false));
    let on_buy_credits = Callback::new(move |()| show_credits.set(true));
    let on_credits_close = Callback::new(move |()| show_credits.set(false));

    // Clearing the session is enough: the unauth redirect sends the user to
    // `/login`.
    let on_logout = Callback::new(move |()| auth.update(AuthState::sign_out));

    let email = Signal::derive(move || auth.with(|a| a.email().unwrap_or_default().to_owned()));
    let active = Signal::derive(move || current.with(DashboardView::section));

    let body = move || match current.get() {
        DashboardView::Section(Section::Overview) => {
            view! { <OverviewPanel on_analyze=on_analyze on_connect=on_connect/> }.into_any()
        }
        DashboardView::Section(Section::Forms) => {
            view! { <FormsPanel on_analyze=on_analyze on_connect=on_connect/> }.into_any()
        }
        DashboardView::Section(Section::Settings) => {
            view! { <SettingsPanel email=email on_buy_credits=on_buy_credits/> }.into_any()
        }
        DashboardView::Analysis { form_id, .. } => {
            view! { <AnalysisPanel form_id=form_id on_open=on_open_submission on_back=on_back/> }.into_any()
        }
        DashboardView::Submission { form_id, submission_id, .. } => {
            view! { <SubmissionPanel form_id=form_id submission_id=submission_id on_back=on_back/> }.into_any()
        }
        DashboardView::NotFound { missing, .. } => {
            view! { <NotFoundPanel missing=missing on_back=on_back/> }.into_any()
        }
    };

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard-page">
                <DashboardNav active=active email=email on_select=on_select on_logout=on_logout/>
                <main class="dashboard-page__body">{body}</main>
                <Show when=move || show_connect.get()>
                    <ConnectFormModal on_close=on_connect_close/>
                </Show>
                <Show when=move || show_credits.get()>
                    <BuyCreditsModal on_close=on_credits_close/>
                </Show>
            </div>
        </Show>
    }
}
