//! Session state model for the access gate.

use serde::{Deserialize, Serialize};

/// The signed-in account, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display username shown in the navigation chrome.
    pub username: String,
    /// User principal name, used to recognize the signed-in user's own
    /// owner entries.
    pub upn: String,
}

/// Authentication state driving the routing gate.
///
/// Exactly two states: unauthenticated users see only the sign-in prompt,
/// authenticated users see the navigation chrome and routed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Account),
}

impl SessionState {
    /// Session used in fixture mode: always authenticated as the fixed
    /// development user.
    pub fn fixture() -> Self {
        Self::Authenticated(Account {
            username: "Alice Smith".to_string(),
            upn: "alice@company.com".to_string(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Authenticated(account) => Some(account),
            Self::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_session_is_authenticated() {
        let session = SessionState::fixture();
        assert!(session.is_authenticated());
        assert_eq!(session.account().unwrap().upn, "alice@company.com");
    }

    #[test]
    fn unauthenticated_has_no_account() {
        assert!(SessionState::Unauthenticated.account().is_none());
    }
}
