#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock campus backend for testing the HTTP clients
pub struct CampusMockServer {
    server: MockServer,
}

impl CampusMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mock a chat reply that only matches the exact request body
    pub async fn mock_chat_exact(&self, request_body: Value, response_body: Value) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(request_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock any chat request with the given reply
    pub async fn mock_chat_reply(&self, response_text: &str, session_id: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": response_text,
                "session_id": session_id,
                "intent": "GENERAL",
                "data": null,
                "requires_confirmation": false
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a backend failure on every endpoint
    pub async fn mock_server_error(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "detail": "Internal server error"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_chat_malformed(&self) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a chat reply that arrives after `delay`
    pub async fn mock_chat_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "late", "session_id": "slow"}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a GET list endpoint
    pub async fn mock_list(&self, list_path: &str, records: Value) {
        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(records))
            .mount(&self.server)
            .await;
    }
}

/// Test data for the catalog endpoints
pub mod test_data {
    use super::*;

    pub fn sample_events() -> Value {
        json!([
            {
                "id": "e1",
                "name": "Tech Symposium",
                "description": "Talks from industry speakers",
                "event_type": "academic",
                "date": "2025-03-14",
                "start_time": "10:00",
                "end_time": "16:00",
                "location": "Main Auditorium",
                "capacity": 200,
                "registered_count": 145,
                "status": "upcoming",
                "organizer": "CS Department",
                "tags": ["tech", "ai"]
            },
            {
                "id": "e2",
                "name": "Spring Fest",
                "event_type": "cultural",
                "date": "2025-04-02"
            }
        ])
    }

    pub fn sample_facilities() -> Value {
        json!([
            {
                "id": "f1",
                "name": "Computer Lab 1",
                "type": "lab",
                "building": "Engineering Block",
                "floor": 2,
                "capacity": 40,
                "features": ["wifi", "projector", "computers"],
                "operational_hours": {"mon-fri": "08:00-20:00"},
                "status": "available"
            }
        ])
    }

    pub fn sample_bookings() -> Value {
        json!([
            {
                "id": "b1",
                "user_name": "Guest User",
                "user_email": "guest@campus.edu",
                "resource_id": "f1",
                "resource_type": "facility",
                "resource_name": "Computer Lab 1",
                "date": "2025-03-20",
                "start_time": "14:00",
                "end_time": "16:00",
                "purpose": "Study group",
                "status": "confirmed",
                "requires_confirmation": true,
                "confirmed_at": "2025-03-01T10:00:00+00:00",
                "created_at": "2025-03-01T09:58:00+00:00"
            }
        ])
    }
}
