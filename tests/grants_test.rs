mod common;

use common::client_for;
use httpmock::prelude::*;
use nylas::domain::{ListGrantsQueryParams, UpdateGrantRequest};
use nylas::NylasError;

fn grant_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "provider": "google",
        "grant_status": "valid",
        "email": "ada@example.com",
        "scope": ["calendar", "email.read_only"],
        "created_at": 1_700_000_000
    })
}

#[tokio::test]
async fn test_list_grants_with_filters() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/grants")
            .query_param("limit", "10")
            .query_param("provider", "google");
        then.status(200).json_body(serde_json::json!({
            "request_id": "req-grants",
            "data": [grant_json("grant-1"), grant_json("grant-2")]
        }));
    });

    let query = ListGrantsQueryParams {
        limit: Some(10),
        provider: Some("google".to_string()),
        ..Default::default()
    };
    let grants = client_for(&server).grants().list(Some(&query)).await.unwrap();

    list_mock.assert();
    assert_eq!(grants.data.len(), 2);
    assert_eq!(grants.data[0].scope, vec!["calendar", "email.read_only"]);
}

#[tokio::test]
async fn test_find_update_destroy_grant() {
    let server = MockServer::start();
    let find_mock = server.mock(|when, then| {
        when.method(GET).path("/v3/grants/grant-1");
        then.status(200).json_body(serde_json::json!({
            "request_id": "req-find",
            "data": grant_json("grant-1")
        }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/v3/grants/grant-1")
            .json_body(serde_json::json!({"scope": ["calendar"]}));
        then.status(200).json_body(serde_json::json!({
            "request_id": "req-update",
            "data": grant_json("grant-1")
        }));
    });
    let destroy_mock = server.mock(|when, then| {
        when.method(DELETE).path("/v3/grants/grant-1");
        then.status(200)
            .json_body(serde_json::json!({"request_id": "req-delete"}));
    });

    let grants = client_for(&server).grants();

    let found = grants.find("grant-1").await.unwrap();
    assert_eq!(found.data.email.as_deref(), Some("ada@example.com"));

    let update = UpdateGrantRequest {
        scope: Some(vec!["calendar".to_string()]),
        ..Default::default()
    };
    let updated = grants.update("grant-1", &update).await.unwrap();
    assert_eq!(updated.request_id, "req-update");

    let deleted = grants.destroy("grant-1").await.unwrap();
    assert_eq!(deleted.request_id, "req-delete");

    find_mock.assert();
    update_mock.assert();
    destroy_mock.assert();
}

#[tokio::test]
async fn test_unparseable_error_body_keeps_status_and_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v3/grants/grant-1");
        then.status(502).body("Bad Gateway");
    });

    let err = client_for(&server).grants().find("grant-1").await.unwrap_err();

    match err {
        NylasError::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}
