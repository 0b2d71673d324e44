//! Integration tests for the Trello client using wiremock mock server

use tc_cli::{CardRequest, Client, ClientError, KeepFromSource, Position};
use tc_config::Credentials;

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn client(mock_server: &MockServer) -> Client {
    Client::new(
        &mock_server.uri(),
        Credentials::new("test-key", "test-token"),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_create_card_sends_credentials_and_id_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .and(query_param("key", "test-key"))
        .and(query_param("token", "test-token"))
        .and(query_param("idList", "5f2"))
        .and(query_param_is_missing("name"))
        .and(query_param_is_missing("pos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "card-1",
            "idList": "5f2",
            "name": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap();

    assert_eq!(result["id"], "card-1");
}

#[tokio::test]
async fn test_create_card_sends_optional_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .and(query_param("idList", "5f2"))
        .and(query_param("name", "Fix login"))
        .and(query_param("pos", "3.5"))
        .and(query_param("idLabels", "l1,l2"))
        .and(query_param("dueComplete", "true"))
        .and(query_param("keepFromSource", "labels,comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "card-2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = CardRequest {
        name: Some("Fix login".to_string()),
        pos: Some(Position::Number(3.5)),
        id_labels: Some(vec!["l1".to_string(), "l2".to_string()]),
        due_complete: Some(true),
        keep_from_source: Some(vec![KeepFromSource::Labels, KeepFromSource::Comments]),
        ..CardRequest::new("5f2")
    };

    let result = client(&mock_server).create_card(&request).await.unwrap();

    assert_eq!(result["id"], "card-2");
}

#[tokio::test]
async fn test_create_card_plain_text_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid value for idList"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .create_card(&CardRequest::new("bogus"))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_api());
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert!(err.to_string().contains("invalid value for idList"));
}

#[tokio::test]
async fn test_unauthorized_json_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid key",
            "error": "ERROR"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 401, .. }));
    assert!(err.to_string().contains("invalid key"));
}

#[tokio::test]
async fn test_error_shaped_body_with_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "ERROR",
            "message": "card limit exceeded"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap_err();

    assert!(err.is_api());
    assert!(err.to_string().contains("card limit exceeded"));
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Not Found"));
}

#[tokio::test]
async fn test_non_json_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_add_label() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards/card-1/labels"))
        .and(query_param("name", "Urgent"))
        .and(query_param("color", "red"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "label-1",
            "name": "Urgent",
            "color": "red"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .add_label("card-1", "Urgent", "red")
        .await
        .unwrap();

    assert_eq!(result["color"], "red");
}

#[tokio::test]
async fn test_add_comment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards/card-1/actions/comments"))
        .and(query_param("text", "Ship it & celebrate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "action-1",
            "type": "commentCard",
            "data": { "text": "Ship it & celebrate" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .add_comment("card-1", "Ship it & celebrate")
        .await
        .unwrap();

    assert_eq!(result["data"]["text"], "Ship it & celebrate");
}

#[tokio::test]
async fn test_card_id_with_reserved_characters_stays_one_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards/a%2Fb%3Fc/actions/comments"))
        .and(query_param("text", "hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "action-2",
            "type": "commentCard"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .add_comment("a/b?c", "hello")
        .await
        .unwrap();

    assert_eq!(result["id"], "action-2");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cards"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(
        &mock_server.uri(),
        Credentials::new("test-key", "test-token"),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client
        .create_card(&CardRequest::new("5f2"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http { .. }));
}
