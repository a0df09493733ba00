//! HTTP-level behavior of the Practicum API client.

use hwbot::error::{AppError, Result};
use hwbot::services::{PracticumClient, StatusSource};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/api/user_api/homework_statuses/";

/// Run a blocking fetch off the async test runtime.
async fn fetch(endpoint: String, token: &'static str, from_date: i64) -> Result<Value> {
    tokio::task::spawn_blocking(move || {
        let client = PracticumClient::new(&endpoint, token)?;
        client.fetch_statuses(from_date)
    })
    .await
    .expect("fetch task panicked")
}

#[tokio::test]
async fn sends_auth_header_and_cursor_then_decodes_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(header("Authorization", "OAuth practicum-secret"))
        .and(query_param("from_date", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1234,
        })))
        .mount(&server)
        .await;

    let endpoint = format!("{}{}", server.uri(), API_PATH);
    let body = fetch(endpoint, "practicum-secret", 1000).await.unwrap();

    assert_eq!(body["current_date"], 1234);
    assert_eq!(body["homeworks"][0]["homework_name"], "hw1");
}

#[tokio::test]
async fn non_success_status_is_an_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let endpoint = format!("{}{}", server.uri(), API_PATH);
    let error = fetch(endpoint, "practicum-secret", 0).await.unwrap_err();

    assert!(matches!(error, AppError::HttpStatus(404)));
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let endpoint = format!("{}{}", server.uri(), API_PATH);
    let error = fetch(endpoint, "practicum-secret", 0).await.unwrap_err();

    assert!(matches!(error, AppError::Parse(_)));
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    // Bind to port 0 to find a free port, then release it synchronously
    // so nothing is listening when the client connects.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        listener
            .local_addr()
            .expect("listener should have an address")
            .port()
    };
    let endpoint = format!("http://127.0.0.1:{port}{API_PATH}");

    let error = fetch(endpoint, "practicum-secret", 0).await.unwrap_err();

    assert!(matches!(error, AppError::Connection(_)));
}
