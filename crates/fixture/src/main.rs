#[tokio::main]
async fn main() {
    spnportal_observability::init();

    let addr = std::env::var("SPNPORTAL_FIXTURE_ADDR").unwrap_or_else(|_| {
        // Same port the real backend's local host uses.
        "0.0.0.0:7071".to_string()
    });

    let app = spnportal_fixture::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!(
        "fixture server listening on {}",
        listener.local_addr().expect("listener has no local addr")
    );

    axum::serve(listener, app).await.expect("server error");
}
