mod fixtures;

use campus_api::{ApiConfig, ApiError, ChatTransport, ClientFactory, HttpChatTransport};
use campus_logging::RequestLogger;
use campus_types::{ChatRequest, SessionHandle};
use fixtures::CampusMockServer;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_first_message_sends_null_session() {
    let server = CampusMockServer::new().await;
    server
        .mock_chat_exact(
            json!({"message": "Show me available facilities", "session_id": null}),
            json!({"response": "Here are 3 facilities", "session_id": "s1"}),
        )
        .await;

    let transport = HttpChatTransport::new(server.uri());
    let reply = transport
        .send(&ChatRequest::new("Show me available facilities", None))
        .await
        .unwrap();

    assert_eq!(reply.text, "Here are 3 facilities");
    assert_eq!(reply.session_id, Some(SessionHandle::new("s1")));
}

#[tokio::test]
async fn test_bound_session_is_sent_verbatim() {
    let server = CampusMockServer::new().await;
    server
        .mock_chat_exact(
            json!({"message": "yes", "session_id": "s1"}),
            json!({
                "response": "Booking Confirmed!",
                "session_id": "s1",
                "intent": "BOOKING_CONFIRMED",
                "data": {"id": "b1", "status": "confirmed"},
                "requires_confirmation": false
            }),
        )
        .await;

    let transport = HttpChatTransport::new(server.uri());
    let reply = transport
        .send(&ChatRequest::new("yes", Some(SessionHandle::new("s1"))))
        .await
        .unwrap();

    assert_eq!(reply.intent.as_deref(), Some("BOOKING_CONFIRMED"));
    assert_eq!(reply.data, Some(json!({"id": "b1", "status": "confirmed"})));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = CampusMockServer::new().await;
    server.mock_server_error().await;

    let transport = HttpChatTransport::new(server.uri());
    let err = transport
        .send(&ChatRequest::new("hello", None))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(err.to_string().contains("Internal server error"));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let server = CampusMockServer::new().await;
    server.mock_chat_malformed().await;

    let transport = HttpChatTransport::new(server.uri());
    let err = transport
        .send(&ChatRequest::new("hello", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_transport() {
    // Nothing listens on port 1
    let transport = HttpChatTransport::new("http://127.0.0.1:1");
    let err = transport
        .send(&ChatRequest::new("hello", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn test_timeout_is_a_transport_failure() {
    let server = CampusMockServer::new().await;
    server.mock_chat_slow(Duration::from_secs(5)).await;

    let config = ApiConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let clients = ClientFactory::create(&config, RequestLogger::new(false)).unwrap();

    let err = clients
        .chat
        .send(&ChatRequest::new("hello", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn test_request_and_response_are_logged_to_files() {
    let server = CampusMockServer::new().await;
    server.mock_chat_reply("hi there", "s9").await;
    let temp_dir = TempDir::new().unwrap();

    let logger = RequestLogger::new(false).with_logs_dir(temp_dir.path().to_path_buf());
    let transport = HttpChatTransport::with_client(server.uri(), reqwest::Client::new(), logger);
    transport.send(&ChatRequest::new("hello", None)).await.unwrap();

    let mut names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    assert_eq!(names.len(), 2);
    assert!(names[0].starts_with("req-"));
    assert!(names[1].starts_with("resp-"));
}

#[tokio::test]
async fn test_chat_url_joins_base_and_path() {
    let transport = HttpChatTransport::new("http://localhost:8000/");
    assert_eq!(transport.chat_url(), "http://localhost:8000/api/chat");
}

#[tokio::test]
async fn test_every_exchange_gets_its_own_log_files() {
    let server = CampusMockServer::new().await;
    server.mock_chat_reply("hi there", "s9").await;
    let temp_dir = TempDir::new().unwrap();

    let logger = RequestLogger::new(false).with_logs_dir(temp_dir.path().to_path_buf());
    let transport = HttpChatTransport::with_client(server.uri(), reqwest::Client::new(), logger);
    for i in 0..20 {
        transport
            .send(&ChatRequest::new(format!("message {}", i), None))
            .await
            .unwrap();
    }

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 40);
}
