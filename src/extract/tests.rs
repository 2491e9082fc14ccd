//! Tests for paginated extraction

use super::*;
use crate::config::HarvestConfig;
use crate::endpoint::Endpoint;
use crate::error::Error;
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rate_limit_body(remaining: u64) -> serde_json::Value {
    serde_json::json!({
        "resources": {
            "core": {
                "limit": 5000,
                "remaining": remaining,
                "used": 5000 - remaining,
                "reset": 1_700_000_000
            }
        }
    })
}

async fn mock_rate_limit(server: &MockServer, remaining: u64) {
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_limit_body(remaining)))
        .mount(server)
        .await;
}

fn extractor_for(server: &MockServer) -> Extractor {
    let mut config = HarvestConfig::new("ghp_test", "octo/hello");
    config.api_base = server.uri();
    Extractor::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_single_page() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/contributors"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "login": "alice"},
            {"id": 2, "login": "bob"}
        ])))
        .mount(&server)
        .await;

    let records = extractor_for(&server)
        .fetch(Endpoint::Contributors)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["login"], "alice");
}

#[tokio::test]
async fn test_fetch_follows_next_links_in_page_order() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    let page2_url = format!("{}/repos/octo/hello/commits?page=2", server.uri());
    let page3_url = format!("{}/repos/octo/hello/commits?page=3", server.uri());

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/commits"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", format!("<{page2_url}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!([{"sha": "a"}, {"sha": "b"}])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/commits"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", format!("<{page3_url}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!([{"sha": "c"}])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/commits"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{"sha": "d"}])))
        .mount(&server)
        .await;

    let records = extractor_for(&server).fetch(Endpoint::Commits).await.unwrap();

    let shas: Vec<&str> = records.iter().map(|r| r["sha"].as_str().unwrap()).collect();
    assert_eq!(shas, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_fetch_appends_state_all_for_issues() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/issues"))
        .and(query_param("per_page", "100"))
        .and(query_param("state", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let records = extractor_for(&server).fetch(Endpoint::Issues).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_omits_state_for_contributors() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    // A state=all request would not match this mock and the fetch would
    // fail with 404.
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/contributors"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = extractor_for(&server).fetch(Endpoint::Contributors).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fetch_short_circuits_on_exhausted_quota() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 0).await;

    // The data route must never be hit.
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .fetch(Endpoint::Contributors)
        .await
        .unwrap_err();

    match err {
        Error::QuotaExhausted { used, limit } => {
            assert_eq!(used, 5000);
            assert_eq!(limit, 5000);
        }
        other => panic!("expected QuotaExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_discards_partial_pages_on_failure() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    let page2_url = format!("{}/repos/octo/hello/commits?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/commits"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", format!("<{page2_url}>; rel=\"next\"").as_str())
                .set_body_json(serde_json::json!([{"sha": "a"}])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/commits"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&server)
        .await;

    let err = extractor_for(&server).fetch(Endpoint::Commits).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
}

#[tokio::test]
async fn test_fetch_rejects_non_array_body() {
    let server = MockServer::start().await;
    mock_rate_limit(&server, 4000).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/contributors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Moved Permanently"})),
        )
        .mount(&server)
        .await;

    let err = extractor_for(&server)
        .fetch(Endpoint::Contributors)
        .await
        .unwrap_err();

    match err {
        Error::UnexpectedShape { endpoint, found } => {
            assert_eq!(endpoint, "contributors");
            assert_eq!(found, "object");
        }
        other => panic!("expected UnexpectedShape, got {other:?}"),
    }
}
