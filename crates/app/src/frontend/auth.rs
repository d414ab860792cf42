//! Browser-side session glue: token storage and the redirect flow.
//!
//! Token issuance and validation are the identity provider's job; this
//! module only holds the issued token in session storage and knows how to
//! start the redirect when there is none. Against the fixture server none
//! of this runs.

use spnportal_auth::{AccessToken, Account, AuthConfig, AuthError, SessionState, TokenCredential};

const TOKEN_KEY: &str = "spnportal.access_token";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn stored_token() -> Option<String> {
    session_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// The session as seen by the access gate.
pub fn current_session() -> SessionState {
    match stored_token() {
        Some(_) => SessionState::Authenticated(Account {
            // Profile details come from the identity provider in the real
            // flow; the stand-in only knows that a token is present.
            username: "Signed-in user".to_string(),
            upn: String::new(),
        }),
        None => SessionState::Unauthenticated,
    }
}

/// Navigate to the identity provider's authorize endpoint.
///
/// The page navigates away; any in-flight calls fail with
/// [`AuthError::RedirectInProgress`].
pub fn begin_sign_in(config: &AuthConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let origin = window.location().origin().unwrap_or_default();
    let url = format!(
        "{}/oauth2/v2.0/authorize?client_id={}&response_type=token&scope={}&redirect_uri={}",
        config.authority(),
        config.client_id,
        config.scope(),
        origin,
    );
    let _ = window.location().set_href(&url);
}

/// Drop the session and return to the sign-in prompt.
pub fn sign_out() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Pick a token out of the redirect fragment, if the identity provider
/// just sent us back. Clears the fragment afterwards so the token never
/// lands in history or bookmarks.
pub fn handle_redirect() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(hash) = location.hash() else {
        return;
    };

    let Some(token) = hash
        .trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("access_token="))
    else {
        return;
    };

    if let Some(storage) = session_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    let _ = location.set_hash("");
}

/// Credential backed by the browser session.
///
/// A missing token means silent acquisition cannot succeed, so the
/// credential starts the interactive redirect and fails the in-flight
/// call.
#[derive(Debug, Clone)]
pub struct RedirectCredential {
    config: AuthConfig,
}

impl RedirectCredential {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl TokenCredential for RedirectCredential {
    fn access_token(&self) -> Result<AccessToken, AuthError> {
        match stored_token() {
            Some(token) => Ok(AccessToken::new(token)),
            None => {
                begin_sign_in(&self.config);
                Err(AuthError::RedirectInProgress)
            }
        }
    }
}
