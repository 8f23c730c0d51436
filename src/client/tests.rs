//! Tests for the record client

use super::*;
use futures::TryStreamExt;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> VariotClient {
    VariotClient::from_url(server.uri()).unwrap()
}

#[test]
fn test_root_url_is_normalized() {
    let client = VariotClient::from_url("localhost:8000").unwrap();
    assert_eq!(client.root_url(), "http://localhost:8000/");
}

#[tokio::test]
async fn test_api_key_from_config() {
    let config = ClientConfig::builder()
        .root_url("http://localhost")
        .api_key("abc")
        .build();
    let client = VariotClient::new(&config).unwrap();

    assert_eq!(client.api_key().await.as_deref(), Some("abc"));
    client.clear_api_key().await;
    assert!(client.api_key().await.is_none());
}

#[tokio::test]
async fn test_fetch_one_builds_path_and_jsonld_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/exploit/VAR-E-202403-0059"))
        .and(query_param("jsonld", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "VAR-E-202403-0059",
            "affected_products": {"@context": {"@vocab": "https://www.variotdbs.pl/ref/affected_products#"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let exploit = client.get_exploit("VAR-E-202403-0059", true).await.unwrap();

    assert_eq!(exploit["id"], "VAR-E-202403-0059");
}

#[tokio::test]
async fn test_fetch_one_passes_error_body_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vuln/VAR-000000-0000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get_vulnerability("VAR-000000-0000", false)
        .await
        .unwrap();

    assert_eq!(body["detail"], "Not found.");
}

#[tokio::test]
async fn test_fetch_one_rejects_non_object_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vuln/VAR-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["VAR-1"])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_vulnerability("VAR-1", false).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_page_sends_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/exploits"))
        .and(query_param("jsonld", "False"))
        .and(query_param("since", "2023-12-13T13:00:00+00:00"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 11,
            "next": null,
            "results": [{"id": "VAR-E-202312-0011"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let since = parse_since("2023-12-13T13:00:00Z");
    let client = client_for(&mock_server);
    let page = client
        .get_exploits(&QueryWindow::new().since(since).limit(5).offset(10))
        .await
        .unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.count(), Some(11));
    assert!(page.is_last());
}

fn parse_since(raw: &str) -> chrono::DateTime<chrono::Utc> {
    crate::pagination::parse_timestamp(raw).unwrap()
}

#[tokio::test]
async fn test_credential_change_applies_mid_traversal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/vulns"))
        .and(query_param("offset", "0"))
        .and(header("Authorization", "Token first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": format!("{}/api/vulns?jsonld=False&limit=1&offset=1", mock_server.uri()),
            "results": [{"id": "VAR-202406-0001"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/vulns"))
        .and(query_param("offset", "1"))
        .and(header("Authorization", "Token second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "results": [{"id": "VAR-202406-0002"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.set_api_key("first").await;

    let mut stream = client.iter_vulnerabilities(QueryWindow::new().limit(1).offset(0));
    let first = stream.try_next().await.unwrap().unwrap();
    assert_eq!(first["id"], "VAR-202406-0001");

    client.set_api_key("second").await;
    let second = stream.try_next().await.unwrap().unwrap();
    assert_eq!(second["id"], "VAR-202406-0002");
    assert!(stream.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_is_up() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).is_up().await);
}

#[tokio::test]
async fn test_is_up_false_on_non_ok_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    assert!(!client_for(&mock_server).is_up().await);
}

#[tokio::test]
async fn test_is_up_with_sub_second_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .root_url(mock_server.uri())
        .timeout(Duration::from_millis(500))
        .build();
    let client = VariotClient::new(&config).unwrap();

    assert!(client.is_up().await);
}

#[tokio::test]
async fn test_is_up_false_when_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::builder()
        .root_url(format!("http://{addr}"))
        .timeout(Duration::from_secs(2))
        .build();
    let client = VariotClient::new(&config).unwrap();

    assert!(!client.is_up().await);
}
