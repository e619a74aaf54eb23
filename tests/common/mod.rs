#![allow(dead_code)]

use httpmock::MockServer;
use nylas::{Client, ClientConfig};

pub const API_KEY: &str = "nyk_test_key";

/// Client pointed at the mock server instead of the real API.
pub fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::new(API_KEY)
        .with_api_uri(server.base_url())
        .with_timeout(5);
    Client::from_config(config).unwrap()
}

pub fn calendar_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "grant_id": "grant-1",
        "name": "Team calendar",
        "read_only": false,
        "is_owned_by_user": true,
        "object": "calendar",
        "timezone": "Europe/Berlin"
    })
}

pub fn event_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "grant_id": "grant-1",
        "calendar_id": "primary",
        "busy": true,
        "read_only": false,
        "created_at": 1_700_000_000,
        "updated_at": 1_700_000_100,
        "participants": [
            {"email": "ada@example.com", "status": "yes", "name": "Ada"}
        ],
        "when": {
            "object": "timespan",
            "start_time": 1_700_003_600,
            "end_time": 1_700_007_200
        },
        "title": "Design review",
        "object": "event"
    })
}
