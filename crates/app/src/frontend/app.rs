//! Application shell: access gate, shared context, routing.

use std::sync::Arc;

use leptos::*;
use leptos_router::*;

use spnportal_auth::{AuthConfig, SessionState, StaticTokenCredential, TokenCredential};
use spnportal_client::{ApiClient, ClientConfig, QueryCache};

use crate::frontend::auth::{self, RedirectCredential};
use crate::frontend::components::{NavBar, SignInPrompt};
use crate::frontend::pages;

/// Main application component.
///
/// Unauthenticated sessions render only the sign-in prompt; nothing else
/// mounts until a session exists. In fixture mode the gate is bypassed
/// with the fixed development session.
#[component]
pub fn App() -> impl IntoView {
    let client_config = ClientConfig::compiled();
    let auth_config = AuthConfig::compiled();

    let session = if client_config.use_fixture {
        SessionState::fixture()
    } else {
        auth::current_session()
    };

    let Some(account) = session.account().cloned() else {
        let config = auth_config.clone();
        return view! {
            <SignInPrompt on_sign_in=move |_: ()| auth::begin_sign_in(&config)/>
        }
        .into_view();
    };

    let credential: Arc<dyn TokenCredential> = if client_config.use_fixture {
        Arc::new(StaticTokenCredential::fixture())
    } else {
        Arc::new(RedirectCredential::new(auth_config))
    };

    let client = match ApiClient::new(&client_config, credential) {
        Ok(client) => client,
        Err(err) => {
            return view! {
                <p class="error">{format!("Failed to initialize API client: {err}")}</p>
            }
            .into_view();
        }
    };

    provide_context(client);
    provide_context(QueryCache::new());
    provide_context(account);

    view! {
        <Router>
            <div class="app">
                <NavBar/>
                <main>
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/spns"/> }/>
                        <Route path="/spns" view=pages::SpnListPage/>
                        <Route path="/spns/new" view=pages::SpnCreatePage/>
                        <Route path="/spns/:id/secrets" view=pages::SecretsPage/>
                        <Route path="/spns/:id/owners" view=pages::OwnersPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
    .into_view()
}
