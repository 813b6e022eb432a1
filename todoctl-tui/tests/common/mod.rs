//! Live server fixture shared by the client test suites.

use tokio::net::TcpListener;
use todoctl_server::{build_router, create_memory_pool, ServerConfig};
use todoctl_tui::ApiClient;

/// Start the API on a random local port with a fresh in-memory database.
///
/// Returns the API base URL, e.g. `http://127.0.0.1:54321/api`.
pub async fn spawn_server() -> String {
    let pool = create_memory_pool().await.unwrap();
    let app = build_router(pool, &ServerConfig::default()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

pub async fn client() -> ApiClient {
    ApiClient::new(&spawn_server().await).unwrap()
}
