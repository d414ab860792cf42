//! SPN creation form.

use leptos::*;
use leptos_router::*;

use spnportal_client::{ApiClient, QueryCache, QueryKey};

use crate::forms;
use crate::frontend::components::ErrorBanner;

/// New-SPN form. Client-side validation mirrors the backend rules for
/// fast feedback; the backend remains authoritative and its `detail`
/// message is surfaced inline on rejection (e.g. a duplicate name).
#[component]
pub fn SpnCreatePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let cache = expect_context::<QueryCache>();

    let display_name = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let homepage_url = create_rw_signal(String::new());
    let reply_urls = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let is_submitting = create_rw_signal(false);

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }

        let request = forms::create_spn_request(
            &display_name.get(),
            &description.get(),
            &homepage_url.get(),
            &reply_urls.get(),
        );
        if let Err(err) = request.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        is_submitting.set(true);
        let client = client.clone();
        let cache = cache.clone();
        spawn_local(async move {
            match client.spns().create(&request).await {
                Ok(_) => {
                    cache.invalidate_after(&QueryKey::Spns);
                    use_navigate()("/spns", Default::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="spn-new">
            <div class="page-header">
                <h2>"New Service Principal"</h2>
                <A href="/spns">"Back to list"</A>
            </div>

            <ErrorBanner message=error/>

            <form on:submit=move |ev| {
                ev.prevent_default();
                submit(ev);
            }>
                <div class="form-group">
                    <label for="display-name">"Display name"</label>
                    <input
                        type="text"
                        id="display-name"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description (optional)"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="homepage-url">"Homepage URL (optional)"</label>
                    <input
                        type="url"
                        id="homepage-url"
                        placeholder="https://example.com"
                        prop:value=move || homepage_url.get()
                        on:input=move |ev| homepage_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="reply-urls">"Reply URLs (optional, one per line)"</label>
                    <textarea
                        id="reply-urls"
                        rows="3"
                        placeholder="https://example.com/auth/callback"
                        prop:value=move || reply_urls.get()
                        on:input=move |ev| reply_urls.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Creating..." } else { "Create" }}
                    </button>
                    <A href="/spns">
                        <button type="button">"Cancel"</button>
                    </A>
                </div>
            </form>
        </div>
    }
}
