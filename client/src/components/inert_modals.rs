//! Modals for actions the product advertises but does not back yet.
//!
//! Connecting a form and buying credits only render their dialogs; the
//! confirm buttons are disabled and nothing is sent anywhere.

use leptos::prelude::*;

use crate::mock::{CREDIT_BALANCE, Platform};

const CREDIT_PACKS: &[(u32, &str)] = &[(1_000, "$19"), (5_000, "$79"), (20_000, "$249")];

#[component]
pub fn ConnectFormModal(on_close: Callback<()>) -> impl IntoView {
    let platforms = [Platform::GoogleForms, Platform::MicrosoftForms, Platform::Typeform]
        .into_iter()
        .map(|p| {
            let class = format!("connect-option connect-option--{}", p.css_modifier());
            view! {
                <li class=class>
                    <span>{p.label()}</span>
                    <button class="btn btn--small" disabled=true>"Connect"</button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ModalFrame title="Connect a form" on_close=on_close>
            <p class="dialog__hint">
                "Pick where your submissions are collected. New responses will sync automatically."
            </p>
            <ul class="connect-options">{platforms}</ul>
        </ModalFrame>
    }
}

#[component]
pub fn BuyCreditsModal(on_close: Callback<()>) -> impl IntoView {
    let packs = CREDIT_PACKS
        .iter()
        .map(|(credits, price)| {
            view! {
                <li class="credit-pack">
                    <span class="credit-pack__amount">{format!("{credits} credits")}</span>
                    <span class="credit-pack__price">{*price}</span>
                    <button class="btn btn--small" disabled=true>"Buy"</button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ModalFrame title="Buy credits" on_close=on_close>
            <p class="dialog__hint">{format!("Current balance: {CREDIT_BALANCE} credits")}</p>
            <ul class="credit-packs">{packs}</ul>
        </ModalFrame>
    }
}

#[component]
fn ModalFrame(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                {children()}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
