//! Root application component with routing and the session owner.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::config::PRODUCT_NAME;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::nav::TopView;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Browser tab title for a top-level view.
pub fn page_title(view: TopView) -> String {
    match view {
        TopView::Landing => PRODUCT_NAME.to_owned(),
        TopView::Login => format!("Sign in | {PRODUCT_NAME}"),
        TopView::Dashboard => format!("Dashboard | {PRODUCT_NAME}"),
    }
}

/// Root application component.
///
/// Owns the single session signal and passes it to the pages that need it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/screenwise.css"/>

        <Router>
            <RouteTitle/>
            <Routes fallback=|| view! { <LandingPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage auth=auth/> }/>
                <Route path=StaticSegment("dashboard") view=move || view! { <DashboardPage auth=auth/> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn RouteTitle() -> impl IntoView {
    let location = use_location();
    let text = move || page_title(TopView::from_path(&location.pathname.get()));
    view! { <Title text=text/> }
}
