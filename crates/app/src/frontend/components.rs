//! Shared UI components: navigation chrome, sign-in prompt, confirm dialog.

use leptos::*;
use leptos_router::*;

use spnportal_auth::Account;

use crate::frontend::auth;

/// Top navigation bar with the signed-in account and sign-out action.
#[component]
pub fn NavBar() -> impl IntoView {
    let account = expect_context::<Account>();

    view! {
        <header class="navbar">
            <A href="/spns">
                <h1>"SPN Portal"</h1>
            </A>
            <div class="account">
                <span class="username">{account.username.clone()}</span>
                <button on:click=move |_| auth::sign_out()>"Sign out"</button>
            </div>
        </header>
    }
}

/// Full-page prompt shown to unauthenticated sessions.
#[component]
pub fn SignInPrompt(#[prop(into)] on_sign_in: Callback<()>) -> impl IntoView {
    view! {
        <div class="sign-in">
            <h1>"SPN Portal"</h1>
            <p>"Sign in to manage service principals."</p>
            <button on:click=move |_| on_sign_in.call(())>"Sign in"</button>
        </div>
    }
}

/// Modal confirmation for destructive actions. Nothing is deleted until
/// the user confirms.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{title}</h3>
                <p>{message}</p>
                <div class="modal-actions">
                    <button class="danger" on:click=move |_| on_confirm.call(())>
                        "Delete"
                    </button>
                    <button on:click=move |_| on_cancel.call(())>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}

/// Inline error banner for failed mutations. Renders nothing while the
/// signal is clear.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|text| {
                view! {
                    <div class="error-banner">
                        <span>{text}</span>
                        <button on:click=move |_| message.set(None)>"Dismiss"</button>
                    </div>
                }
            })
        }}
    }
}
