//! Owners page for one SPN.

use leptos::*;
use leptos_router::*;

use spnportal_auth::Account;
use spnportal_client::{ApiClient, QueryCache, QueryKey};
use spnportal_core::{AddOwnerRequest, Owner, SpnId};

use crate::ViewState;
use crate::frontend::components::{ConfirmDialog, ErrorBanner};

/// Owner list plus add-by-UPN form for one SPN. Removing the last owner
/// is permitted; duplicate additions are rejected by the backend and
/// surfaced inline.
#[component]
pub fn OwnersPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let cache = expect_context::<QueryCache>();
    let account = expect_context::<Account>();

    let params = use_params_map();
    let spn_id = move || SpnId::new(params.get().get("id").cloned().unwrap_or_default());

    let refresh = create_rw_signal(0u32);
    let error = create_rw_signal(Option::<String>::None);
    let pending_remove = create_rw_signal(Option::<Owner>::None);

    let upn = create_rw_signal(String::new());
    let is_submitting = create_rw_signal(false);

    let owners = {
        let client = client.clone();
        let cache = cache.clone();
        create_resource(
            move || (spn_id(), refresh.get()),
            move |(id, _)| {
                let client = client.clone();
                let cache = cache.clone();
                async move {
                    let fetch = client.clone();
                    let fetch_id = id.clone();
                    ViewState::from_result(
                        cache
                            .fetch_with(QueryKey::Owners(id), move || async move {
                                fetch.owners().list(&fetch_id).await
                            })
                            .await,
                    )
                }
            },
        )
    };

    let add = {
        let client = client.clone();
        let cache = cache.clone();
        move |_| {
            if is_submitting.get() {
                return;
            }
            let request = AddOwnerRequest::new(upn.get().trim());
            if let Err(err) = request.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            is_submitting.set(true);
            let id = spn_id();
            let client = client.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match client.owners().add(&id, &request).await {
                    Ok(_) => {
                        cache.invalidate_after(&QueryKey::Owners(id));
                        upn.set(String::new());
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                is_submitting.set(false);
            });
        }
    };

    let confirm_remove = {
        let client = client.clone();
        let cache = cache.clone();
        move |_: ()| {
            let Some(owner) = pending_remove.get_untracked() else {
                return;
            };
            pending_remove.set(None);
            let id = spn_id();
            let client = client.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match client.owners().remove(&id, &owner.id).await {
                    Ok(()) => {
                        cache.invalidate_after(&QueryKey::Owners(id));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let own_upn = account.upn.clone();

    view! {
        <div class="owners">
            <div class="page-header">
                <h2>"Owners"</h2>
                <A href="/spns">"Back to list"</A>
            </div>

            <ErrorBanner message=error/>

            {move || match owners.get().unwrap_or(ViewState::Loading) {
                ViewState::Loading => view! { <p class="loading">"Loading..."</p> }.into_view(),
                ViewState::Failed(message) => view! { <p class="error">{message}</p> }.into_view(),
                ViewState::Empty => {
                    view! { <p class="empty">"This SPN has no owners."</p> }.into_view()
                }
                ViewState::Ready(items) => {
                    let own_upn = own_upn.clone();
                    view! {
                        <ul class="owner-list">
                            {items.iter().map(|owner| {
                                let remove_target = owner.clone();
                                let is_self = owner.upn == own_upn;
                                view! {
                                    <li>
                                        <span class="name">{owner.display_name.clone()}</span>
                                        <span class="upn">{owner.upn.clone()}</span>
                                        {is_self.then(|| view! { <span class="badge">"you"</span> })}
                                        <button
                                            class="danger"
                                            on:click=move |_| pending_remove.set(Some(remove_target.clone()))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}

            <div class="add-owner">
                <h3>"Add owner"</h3>
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    add(ev);
                }>
                    <div class="form-group">
                        <label for="owner-upn">"User principal name"</label>
                        <input
                            type="text"
                            id="owner-upn"
                            placeholder="user@company.com"
                            prop:value=move || upn.get()
                            on:input=move |ev| upn.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Adding..." } else { "Add" }}
                    </button>
                </form>
            </div>

            {move || {
                let confirm = confirm_remove.clone();
                pending_remove.get().map(|owner| {
                    view! {
                        <ConfirmDialog
                            title="Remove owner"
                            message=format!("Remove {} as an owner of this SPN?", owner.upn)
                            on_confirm=confirm
                            on_cancel=move |_: ()| pending_remove.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}
