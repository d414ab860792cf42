//! SPN list page.

use leptos::*;
use leptos_router::*;

use spnportal_client::{ApiClient, QueryCache, QueryKey};
use spnportal_core::ServicePrincipal;

use crate::ViewState;
use crate::frontend::components::{ConfirmDialog, ErrorBanner};

/// All service principals, with per-row links to secrets and owners and a
/// confirmed delete action.
#[component]
pub fn SpnListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let cache = expect_context::<QueryCache>();

    let refresh = create_rw_signal(0u32);
    let mutation_error = create_rw_signal(Option::<String>::None);
    let pending_delete = create_rw_signal(Option::<ServicePrincipal>::None);

    let spns = {
        let client = client.clone();
        let cache = cache.clone();
        create_resource(
            move || refresh.get(),
            move |_| {
                let client = client.clone();
                let cache = cache.clone();
                async move {
                    let fetch = client.clone();
                    ViewState::from_result(
                        cache
                            .fetch_with(QueryKey::Spns, move || async move {
                                fetch.spns().list().await
                            })
                            .await,
                    )
                }
            },
        )
    };

    let confirm_delete = {
        let client = client.clone();
        let cache = cache.clone();
        move |_: ()| {
            let Some(spn) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let client = client.clone();
            let cache = cache.clone();
            spawn_local(async move {
                match client.spns().delete(&spn.id).await {
                    Ok(()) => {
                        cache.invalidate_after(&QueryKey::Spn(spn.id.clone()));
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => mutation_error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <div class="spn-list">
            <div class="page-header">
                <h2>"Service Principals"</h2>
                <A href="/spns/new">
                    <button>"New SPN"</button>
                </A>
            </div>

            <ErrorBanner message=mutation_error/>

            {move || match spns.get().unwrap_or(ViewState::Loading) {
                ViewState::Loading => view! { <p class="loading">"Loading..."</p> }.into_view(),
                ViewState::Failed(message) => view! { <p class="error">{message}</p> }.into_view(),
                ViewState::Empty => {
                    view! { <p class="empty">"No service principals yet. Create one to get started."</p> }
                        .into_view()
                }
                ViewState::Ready(items) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Application ID"</th>
                                <th>"Secrets"</th>
                                <th>"Owner"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.iter().map(|spn| {
                                let delete_target = spn.clone();
                                view! {
                                    <tr>
                                        <td>{spn.display_name.clone()}</td>
                                        <td class="app-id">{spn.app_id.clone()}</td>
                                        <td>{spn.secret_count}</td>
                                        <td>{spn.owner_upn.clone()}</td>
                                        <td>
                                            <A href=format!("/spns/{}/secrets", spn.id)>"Secrets"</A>
                                            " "
                                            <A href=format!("/spns/{}/owners", spn.id)>"Owners"</A>
                                            " "
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

            {move || {
                let confirm = confirm_delete.clone();
                pending_delete.get().map(|spn| {
                    view! {
                        <ConfirmDialog
                            title="Delete service principal"
                            message=format!(
                                "Delete '{}'? Its secrets and owner assignments are removed with it.",
                                spn.display_name,
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
