//! Integration tests: the typed client driving the fixture server end to
//! end, including error normalization and cache invalidation.

use std::sync::Arc;

use spnportal_auth::{AuthError, StaticTokenCredential, TokenCredential};
use spnportal_client::{ApiClient, ApiError, ClientConfig, QueryCache, QueryKey};
use spnportal_core::{
    AddOwnerRequest, CreateSecretRequest, CreateSpnRequest, ServicePrincipal, UpdateSpnRequest,
};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = spnportal_fixture::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v1", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ApiClient {
        let config = ClientConfig::new(&self.base_url).with_fixture(true);
        ApiClient::new(&config, Arc::new(StaticTokenCredential::fixture()))
            .expect("failed to build client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Server that kills the first accepted connection without a response,
/// then serves the fixture app on the same listener.
async fn spawn_dropping_first_connection() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
        axum::serve(listener, spnportal_fixture::build_app())
            .await
            .unwrap();
    });

    format!("http://{}/api/v1", addr)
}

fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig::new(base_url).with_fixture(true);
    ApiClient::new(&config, Arc::new(StaticTokenCredential::fixture()))
        .expect("failed to build client")
}

#[tokio::test]
async fn list_and_get_deserialize_into_domain_types() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let spns = client.spns().list().await.unwrap();
    assert_eq!(spns.len(), 3);

    let first = client.spns().get(&spns[0].id).await.unwrap();
    assert_eq!(first.display_name, spns[0].display_name);
    assert_eq!(first.owner_upn, "alice@company.com");
}

#[tokio::test]
async fn create_update_delete_spn_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let spn = client
        .spns()
        .create(&CreateSpnRequest::new("svc-lifecycle"))
        .await
        .unwrap();
    assert_eq!(spn.secret_count, 0);

    let updated = client
        .spns()
        .update(
            &spn.id,
            &UpdateSpnRequest {
                description: Some("deploys things".to_string()),
                ..UpdateSpnRequest::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("deploys things"));

    client.spns().delete(&spn.id).await.unwrap();

    let err = client.spns().delete(&spn.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn backend_detail_strings_surface_in_errors() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let err = client
        .spns()
        .create(&CreateSpnRequest::new("my-ci-pipeline"))
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, 409);
            assert_eq!(detail, "SPN with name 'my-ci-pipeline' already exists");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn secret_creation_reveals_plaintext_once() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let spn_id = spnportal_core::SpnId::new("spn-003");
    let created = client
        .secrets()
        .create(&spn_id, &CreateSecretRequest::new("s1").with_expiry_months(12))
        .await
        .unwrap();
    assert!(!created.secret_text.is_empty());
    assert!(created.secret_text.starts_with(&created.secret.hint));

    // The typed list shape has no plaintext field at all.
    let listed = client.secrets().list(&spn_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].key_id, created.secret.key_id);
}

#[tokio::test]
async fn two_secret_cap_is_a_422() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let spn_id = spnportal_core::SpnId::new("spn-002");
    let err = client
        .secrets()
        .create(&spn_id, &CreateSecretRequest::new("overflow"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn duplicate_owner_is_a_409() {
    let srv = TestServer::spawn().await;
    let client = srv.client();

    let spn_id = spnportal_core::SpnId::new("spn-001");
    let err = client
        .owners()
        .add(&spn_id, &AddOwnerRequest::new("bob@company.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));

    let owners = client.owners().list(&spn_id).await.unwrap();
    assert_eq!(owners.len(), 2);
}

#[tokio::test]
async fn credential_failure_fails_before_any_request() {
    struct NoSession;
    impl TokenCredential for NoSession {
        fn access_token(&self) -> Result<spnportal_auth::AccessToken, AuthError> {
            Err(AuthError::NoAccount)
        }
    }

    let srv = TestServer::spawn().await;
    let config = ClientConfig::new(&srv.base_url);
    let client = ApiClient::new(&config, Arc::new(NoSession)).unwrap();

    let err = client.spns().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::NoAccount)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Port 9 (discard) is never serving; both the attempt and its single
    // retry fail at the transport layer.
    let config = ClientConfig::new("http://127.0.0.1:9/api/v1");
    let client = ApiClient::new(&config, Arc::new(StaticTokenCredential::fixture())).unwrap();

    let err = client.spns().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn get_recovers_when_the_single_retry_lands() {
    // The first connection dies at the transport layer; the one GET retry
    // reaches the now-serving backend and the read succeeds.
    let base_url = spawn_dropping_first_connection().await;
    let client = client_for(&base_url);

    let spns = client.spns().list().await.unwrap();
    assert_eq!(spns.len(), 3);
}

#[tokio::test]
async fn writes_are_never_retried_on_transport_failure() {
    let base_url = spawn_dropping_first_connection().await;
    let client = client_for(&base_url);

    let err = client
        .spns()
        .create(&CreateSpnRequest::new("svc-no-replay"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));

    // The backend is serving now; the failed create was not replayed
    // against it.
    let spns = client.spns().list().await.unwrap();
    assert!(spns.iter().all(|s| s.display_name != "svc-no-replay"));
}

#[tokio::test]
async fn cache_serves_reads_until_invalidated_by_mutation() {
    let srv = TestServer::spawn().await;
    let client = srv.client();
    let cache = QueryCache::new();

    let fetch = |client: ApiClient| {
        move || async move { client.spns().list().await }
    };

    let first: Vec<ServicePrincipal> = cache
        .fetch_with(QueryKey::Spns, fetch(client.clone()))
        .await
        .unwrap();
    assert_eq!(first.len(), 3);

    // A write lands behind the cache's back; the stale list is served
    // until the mutation path invalidates it.
    let created = client
        .spns()
        .create(&CreateSpnRequest::new("svc-cached"))
        .await
        .unwrap();

    let stale: Vec<ServicePrincipal> = cache
        .fetch_with(QueryKey::Spns, fetch(client.clone()))
        .await
        .unwrap();
    assert_eq!(stale.len(), 3);

    cache.invalidate_after(&QueryKey::Spn(created.id.clone()));

    let fresh: Vec<ServicePrincipal> = cache
        .fetch_with(QueryKey::Spns, fetch(client.clone()))
        .await
        .unwrap();
    assert_eq!(fresh.len(), 4);
    assert!(fresh.iter().any(|s| s.id == created.id));
}
