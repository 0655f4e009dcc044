//! Shared test helpers: spin the router up on an ephemeral port.

use quill_api::{app, AppState};

/// Serve `state` on 127.0.0.1:0 and return the base URL.
pub async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}
