//! In-memory CRUD state behind the fixture routes.
//!
//! Holds the same invariants the real backend enforces: unique SPN display
//! names (409), unique owner UPNs per SPN (409), and the two-secret cap
//! (422). Deleting an SPN cascades to its secrets and owners. The
//! minimum-owner-count invariant is deliberately NOT enforced, matching the
//! observed backend surface.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Months, Utc};
use uuid::Uuid;

use spnportal_core::{
    AddOwnerRequest, CreateSecretRequest, CreateSpnRequest, DomainError, DomainResult,
    MAX_SECRETS_PER_SPN, Owner, OwnerId, Secret, SecretCreated, SecretKeyId, ServicePrincipal,
    SpnId, UpdateSpnRequest,
};

#[derive(Debug, Default)]
struct State {
    spns: Vec<ServicePrincipal>,
    secrets: HashMap<SpnId, Vec<Secret>>,
    owners: HashMap<SpnId, Vec<Owner>>,
}

/// In-memory backend state.
#[derive(Debug, Default)]
pub struct FixtureStore {
    state: Mutex<State>,
}

/// The fixed development user every fixture session runs as.
pub fn signed_in_user() -> Owner {
    Owner {
        id: OwnerId::new("user-001"),
        display_name: "Alice Smith".to_string(),
        upn: "alice@company.com".to_string(),
        mail: Some("alice@company.com".to_string()),
    }
}

fn random_suffix() -> String {
    let mut buf = Uuid::encode_buffer();
    let simple = Uuid::new_v4().simple().encode_lower(&mut buf);
    simple.chars().take(8).collect()
}

impl FixtureStore {
    /// Empty store (tests that want a clean slate).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store seeded with the development data set: three SPNs owned by the
    /// fixed signed-in user, with one, two, and zero secrets respectively.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut state = store.state.lock().unwrap_or_else(|e| e.into_inner());
            seed(&mut state);
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panic while holding the lock only happens on a bug in this
        // module; recover the data rather than poisoning every request.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ----- SPNs -----

    pub fn list_spns(&self) -> Vec<ServicePrincipal> {
        self.lock().spns.clone()
    }

    pub fn get_spn(&self, id: &SpnId) -> DomainResult<ServicePrincipal> {
        self.lock()
            .spns
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn create_spn(&self, request: CreateSpnRequest) -> DomainResult<ServicePrincipal> {
        request.validate()?;

        let mut state = self.lock();
        if state
            .spns
            .iter()
            .any(|s| s.display_name == request.display_name)
        {
            return Err(DomainError::conflict(format!(
                "SPN with name '{}' already exists",
                request.display_name
            )));
        }

        let owner = signed_in_user();
        let spn = ServicePrincipal {
            id: SpnId::new(format!("spn-{}", random_suffix())),
            display_name: request.display_name,
            app_id: Uuid::new_v4().to_string(),
            description: request.description,
            homepage_url: request.homepage_url,
            reply_urls: request.reply_urls.unwrap_or_default(),
            owner_id: owner.id.clone(),
            owner_upn: owner.upn.clone(),
            secret_count: 0,
            created_at: Utc::now(),
        };

        tracing::info!(spn = %spn.id, name = %spn.display_name, "created SPN");

        state.secrets.insert(spn.id.clone(), Vec::new());
        state.owners.insert(spn.id.clone(), vec![owner]);
        state.spns.push(spn.clone());
        Ok(spn)
    }

    pub fn update_spn(
        &self,
        id: &SpnId,
        request: UpdateSpnRequest,
    ) -> DomainResult<ServicePrincipal> {
        let mut state = self.lock();
        let spn = state
            .spns
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(description) = request.description {
            spn.description = Some(description);
        }
        if let Some(homepage_url) = request.homepage_url {
            spn.homepage_url = Some(homepage_url);
        }
        if let Some(reply_urls) = request.reply_urls {
            spn.reply_urls = reply_urls;
        }

        Ok(spn.clone())
    }

    pub fn delete_spn(&self, id: &SpnId) -> DomainResult<()> {
        let mut state = self.lock();
        let idx = state
            .spns
            .iter()
            .position(|s| &s.id == id)
            .ok_or(DomainError::NotFound)?;

        state.spns.remove(idx);
        state.secrets.remove(id);
        state.owners.remove(id);

        tracing::info!(spn = %id, "deleted SPN");
        Ok(())
    }

    // ----- Secrets -----

    pub fn list_secrets(&self, spn_id: &SpnId) -> DomainResult<Vec<Secret>> {
        let state = self.lock();
        state
            .secrets
            .get(spn_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn create_secret(
        &self,
        spn_id: &SpnId,
        request: CreateSecretRequest,
    ) -> DomainResult<SecretCreated> {
        request.validate()?;
        let months = request.expiry_months_or_default();

        let mut state = self.lock();
        if !state.spns.iter().any(|s| &s.id == spn_id) {
            return Err(DomainError::NotFound);
        }

        let secrets = state.secrets.entry(spn_id.clone()).or_default();
        if secrets.len() >= MAX_SECRETS_PER_SPN {
            return Err(DomainError::invariant(format!(
                "Maximum of {MAX_SECRETS_PER_SPN} secrets per SPN"
            )));
        }

        let secret_text = format!(
            "{}~{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );
        let hint: String = secret_text.chars().take(3).collect();
        let key_id = SecretKeyId::new(format!("key-{}", random_suffix()));
        let start = Utc::now();
        let end = start
            .checked_add_months(Months::new(months))
            .unwrap_or(start + Duration::days(30 * i64::from(months)));

        let secret = Secret {
            key_id: key_id.clone(),
            display_name: request.display_name,
            hint,
            start_date_time: start,
            end_date_time: end,
            key_vault_secret_name: format!("spn-{spn_id}-{key_id}"),
        };
        secrets.push(secret.clone());

        let count = secrets.len() as u32;
        if let Some(spn) = state.spns.iter_mut().find(|s| &s.id == spn_id) {
            spn.secret_count = count;
        }

        tracing::info!(spn = %spn_id, key = %secret.key_id, "created secret");

        Ok(SecretCreated {
            secret,
            secret_text,
        })
    }

    pub fn delete_secret(&self, spn_id: &SpnId, key_id: &SecretKeyId) -> DomainResult<()> {
        let mut state = self.lock();
        let secrets = state.secrets.get_mut(spn_id).ok_or(DomainError::NotFound)?;
        let idx = secrets
            .iter()
            .position(|s| &s.key_id == key_id)
            .ok_or(DomainError::NotFound)?;
        secrets.remove(idx);

        let count = secrets.len() as u32;
        if let Some(spn) = state.spns.iter_mut().find(|s| &s.id == spn_id) {
            spn.secret_count = count;
        }

        tracing::info!(spn = %spn_id, key = %key_id, "deleted secret");
        Ok(())
    }

    // ----- Owners -----

    pub fn list_owners(&self, spn_id: &SpnId) -> DomainResult<Vec<Owner>> {
        let state = self.lock();
        state
            .owners
            .get(spn_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn add_owner(&self, spn_id: &SpnId, request: AddOwnerRequest) -> DomainResult<Owner> {
        request.validate()?;

        let mut state = self.lock();
        if !state.spns.iter().any(|s| &s.id == spn_id) {
            return Err(DomainError::NotFound);
        }

        let owners = state.owners.entry(spn_id.clone()).or_default();
        if owners.iter().any(|o| o.upn == request.upn) {
            return Err(DomainError::conflict("User is already an owner"));
        }

        let local_part = request.upn.split('@').next().unwrap_or(&request.upn);
        let owner = Owner {
            id: OwnerId::new(format!("user-{}", random_suffix())),
            display_name: local_part.to_string(),
            upn: request.upn.clone(),
            mail: Some(request.upn),
        };
        owners.push(owner.clone());

        tracing::info!(spn = %spn_id, owner = %owner.id, "added owner");
        Ok(owner)
    }

    /// Remove an owner. The last remaining owner is NOT protected here; the
    /// observed backend surface does not enforce a minimum owner count.
    pub fn remove_owner(&self, spn_id: &SpnId, owner_id: &OwnerId) -> DomainResult<()> {
        let mut state = self.lock();
        let owners = state.owners.get_mut(spn_id).ok_or(DomainError::NotFound)?;
        let idx = owners
            .iter()
            .position(|o| &o.id == owner_id)
            .ok_or(DomainError::NotFound)?;
        owners.remove(idx);

        tracing::info!(spn = %spn_id, owner = %owner_id, "removed owner");
        Ok(())
    }
}

fn seed(state: &mut State) {
    let alice = signed_in_user();
    let bob = Owner {
        id: OwnerId::new("user-002"),
        display_name: "Bob Jones".to_string(),
        upn: "bob@company.com".to_string(),
        mail: Some("bob@company.com".to_string()),
    };

    let entries = [
        (
            "spn-001",
            "my-ci-pipeline",
            "aaaaaaaa-0001-0001-0001-aaaaaaaaaaaa",
            Some("Used by GitLab CI to deploy to dev"),
            "2025-11-10T09:00:00Z",
        ),
        (
            "spn-002",
            "data-platform-reader",
            "bbbbbbbb-0002-0002-0002-bbbbbbbbbbbb",
            Some("Read-only access to storage for the data team"),
            "2025-12-01T14:30:00Z",
        ),
        (
            "spn-003",
            "monitoring-exporter",
            "cccccccc-0003-0003-0003-cccccccccccc",
            None,
            "2026-01-15T11:00:00Z",
        ),
    ];

    for (id, name, app_id, description, created_at) in entries {
        state.spns.push(ServicePrincipal {
            id: SpnId::new(id),
            display_name: name.to_string(),
            app_id: app_id.to_string(),
            description: description.map(str::to_string),
            homepage_url: None,
            reply_urls: Vec::new(),
            owner_id: alice.id.clone(),
            owner_upn: alice.upn.clone(),
            secret_count: 0,
            created_at: created_at.parse().unwrap_or_else(|_| Utc::now()),
        });
        state.secrets.insert(SpnId::new(id), Vec::new());
        state.owners.insert(SpnId::new(id), vec![alice.clone()]);
    }

    let seed_secret = |name: &str, hint: &str, start: &str, end: &str, vault: &str| Secret {
        key_id: SecretKeyId::new(format!("key-{}", random_suffix())),
        display_name: name.to_string(),
        hint: hint.to_string(),
        start_date_time: start.parse().unwrap_or_else(|_| Utc::now()),
        end_date_time: end.parse().unwrap_or_else(|_| Utc::now()),
        key_vault_secret_name: vault.to_string(),
    };

    state.secrets.insert(
        SpnId::new("spn-001"),
        vec![seed_secret(
            "ci-secret",
            "aB3",
            "2025-11-10T09:00:00Z",
            "2026-11-10T09:00:00Z",
            "spn-my-ci-pipeline-key-001",
        )],
    );
    state.secrets.insert(
        SpnId::new("spn-002"),
        vec![
            seed_secret(
                "primary",
                "xY9",
                "2025-12-01T14:30:00Z",
                "2026-02-28T14:30:00Z",
                "spn-data-platform-reader-key-002a",
            ),
            seed_secret(
                "backup",
                "mK2",
                "2025-12-01T14:30:00Z",
                "2026-12-01T14:30:00Z",
                "spn-data-platform-reader-key-002b",
            ),
        ],
    );

    if let Some(spn) = state.spns.iter_mut().find(|s| s.id.as_str() == "spn-001") {
        spn.secret_count = 1;
    }
    if let Some(spn) = state.spns.iter_mut().find(|s| s.id.as_str() == "spn-002") {
        spn.secret_count = 2;
    }

    if let Some(owners) = state.owners.get_mut(&SpnId::new("spn-001")) {
        owners.push(bob);
    }
}
