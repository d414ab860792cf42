//! Client secrets page for one SPN.

use chrono::Utc;
use leptos::*;
use leptos_router::*;

use spnportal_client::{ApiClient, QueryCache, QueryKey};
use spnportal_core::{
    CreateSecretRequest, DEFAULT_EXPIRY_MONTHS, MAX_SECRETS_PER_SPN, Secret, SecretCreated, SpnId,
};

use crate::ViewState;
use crate::frontend::components::{ConfirmDialog, ErrorBanner};

/// Secret list plus creation form for one SPN.
///
/// A freshly created secret is shown in a one-time reveal dialog. The
/// plaintext lives only in that dialog's signal and is dropped on dismiss;
/// it is never written to the query cache and cannot be shown again.
#[component]
pub fn SecretsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let cache = expect_context::<QueryCache>();

    let params = use_params_map();
    let spn_id = move || SpnId::new(params.get().get("id").cloned().unwrap_or_default());

    let refresh = create_rw_signal(0u32);
    let error = create_rw_signal(Option::<String>::None);
    let revealed = create_rw_signal(Option::<SecretCreated>::None);
    let pending_delete = create_rw_signal(Option::<Secret>::None);

    let display_name = create_rw_signal(String::new());
    let expiry_months = create_rw_signal(DEFAULT_EXPIRY_MONTHS);
    let is_submitting = create_rw_signal(false);

    let spn = {
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
                    cache
                        .fetch_with(QueryKey::Spn(id), move || async move {
                            fetch.spns().get(&fetch_id).await
                        })
                        .await
                        .ok()
                }
            },
        )
    };

    let secrets = {
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
                            .fetch_with(QueryKey::Secrets(id), move || async move {
                                fetch.secrets().list(&fetch_id).await
                            })
                            .await,
                    )
                }
            },
        )
    };

    let at_capacity = move || {
        matches!(
            secrets.get(),
            Some(ViewState::Ready(ref items)) if items.len() >= MAX_SECRETS_PER_SPN
        )
    };

    let create = {
        let client = client.clone();
        let cache = cache.clone();
        move |_| {
            if is_submitting.get() {
                return;
            }
            let request = CreateSecretRequest::new(display_name.get().trim())
                .with_expiry_months(expiry_months.get());
            if let Err(err) = request.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            is_submitting.set(true);
            let id = spn_id();
            let client = client.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match client.secrets().create(&id, &request).await {
                    Ok(created) => {
                        cache.invalidate_after(&QueryKey::Secrets(id));
                        display_name.set(String::new());
                        revealed.set(Some(created));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                is_submitting.set(false);
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        let cache = cache.clone();
        move |_: ()| {
            let Some(secret) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let id = spn_id();
            let client = client.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match client.secrets().delete(&id, &secret.key_id).await {
                    Ok(()) => {
                        cache.invalidate_after(&QueryKey::Secrets(id));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <div class="secrets">
            <div class="page-header">
                <h2>
                    {move || match spn.get().flatten() {
                        Some(spn) => format!("Secrets for {}", spn.display_name),
                        None => "Secrets".to_string(),
                    }}
                </h2>
                <A href="/spns">"Back to list"</A>
            </div>

            <ErrorBanner message=error/>

            {move || match secrets.get().unwrap_or(ViewState::Loading) {
                ViewState::Loading => view! { <p class="loading">"Loading..."</p> }.into_view(),
                ViewState::Failed(message) => view! { <p class="error">{message}</p> }.into_view(),
                ViewState::Empty => {
                    view! { <p class="empty">"No secrets. Create one below."</p> }.into_view()
                }
                ViewState::Ready(items) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Hint"</th>
                                <th>"Valid from"</th>
                                <th>"Expires"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.iter().map(|secret| {
                                let delete_target = secret.clone();
                                let expired = secret.is_expired(Utc::now());
                                view! {
                                    <tr class:expired=expired>
                                        <td>{secret.display_name.clone()}</td>
                                        <td class="hint">{format!("{}***", secret.hint)}</td>
                                        <td>{secret.start_date_time.format("%Y-%m-%d").to_string()}</td>
                                        <td>
                                            {secret.end_date_time.format("%Y-%m-%d").to_string()}
                                            {expired.then(|| view! { <span class="badge">"expired"</span> })}
                                        </td>
                                        <td>
                                            <button
                                                class="danger"
                                                on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
            }}

            <div class="create-secret">
                <h3>"New secret"</h3>
                {move || {
                    at_capacity()
                        .then(|| view! {
                            <p class="notice">
                                {format!("Maximum of {MAX_SECRETS_PER_SPN} secrets per SPN. Delete one before creating another.")}
                            </p>
                        })
                }}
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    create(ev);
                }>
                    <div class="form-group">
                        <label for="secret-name">"Display name"</label>
                        <input
                            type="text"
                            id="secret-name"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="expiry">"Expires after"</label>
                        <select
                            id="expiry"
                            on:change=move |ev| {
                                if let Ok(months) = event_target_value(&ev).parse::<u32>() {
                                    expiry_months.set(months);
                                }
                            }
                        >
                            <option value="6">"6 months"</option>
                            <option value="12" selected>"12 months"</option>
                            <option value="24">"24 months"</option>
                        </select>
                    </div>
                    <button
                        type="submit"
                        disabled=move || is_submitting.get() || at_capacity()
                    >
                        {move || if is_submitting.get() { "Creating..." } else { "Create secret" }}
                    </button>
                </form>
            </div>

            {move || revealed.get().map(|created| {
                view! {
                    <div class="modal-backdrop">
                        <div class="modal reveal">
                            <h3>"Secret created"</h3>
                            <p>"Copy the value now. It cannot be retrieved again."</p>
                            <code class="secret-text">{created.secret_text.clone()}</code>
                            <div class="modal-actions">
                                <button on:click=move |_| revealed.set(None)>"Done"</button>
                            </div>
                        </div>
                    </div>
                }
            })}

            {move || {
                let confirm = confirm_delete.clone();
                pending_delete.get().map(|secret| {
                    view! {
                        <ConfirmDialog
                            title="Delete secret"
                            message=format!(
                                "Delete secret '{}'? Clients using it will stop authenticating.",
                                secret.display_name,
                            )
                            on_confirm=confirm
                            on_cancel=move |_: ()| pending_delete.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}
