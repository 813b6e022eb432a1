//! ApiClient against a live server.

mod common;

use todoctl_tui::{ApiClient, ClientError};

#[tokio::test]
async fn crud_lifecycle() {
    let client = common::client().await;

    assert!(client.list().await.unwrap().is_empty());

    let todo = client.create(" Buy milk ").await.unwrap();
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);

    let toggled = client.set_completed(todo.id, true).await.unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.id, todo.id);

    assert_eq!(client.list().await.unwrap(), vec![toggled]);

    client.delete(todo.id).await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_title_reports_server_message() {
    let client = common::client().await;

    let err = client.create("   ").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.to_string(),
        "title is required and must be a non-empty string"
    );
}

#[tokio::test]
async fn missing_ids_report_not_found() {
    let client = common::client().await;

    let err = client.set_completed(999, true).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "todo '999' not found");

    let todo = client.create("once").await.unwrap();
    client.delete(todo.id).await.unwrap();
    let err = client.delete(todo.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}/api", addr)).unwrap();
    let err = client.list().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}
