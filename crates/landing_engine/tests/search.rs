use std::time::Duration;

use landing_engine::{FailureKind, ReqwestSearchClient, SearchClient, SearchSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestSearchClient {
    let settings = SearchSettings::new(format!("{}/api/search", server.uri()));
    ReqwestSearchClient::new(settings).expect("client")
}

#[tokio::test]
async fn search_sends_canonical_query_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("term", "foo bar"))
        .and(query_param("year", "2020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "title": "Second", "url": "/b" },
            { "title": "First", "url": "/a" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search("term=foo+bar&year=2020")
        .await
        .expect("search ok");

    assert_eq!(
        results,
        vec![
            json!({ "title": "Second", "url": "/b" }),
            json!({ "title": "First", "url": "/a" }),
        ]
    );
}

#[tokio::test]
async fn empty_list_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let results = client_for(&server).search("term=none").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn non_success_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).search("term=x").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn malformed_body_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("term=x").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn unreachable_endpoint_is_network_failure() {
    // Grab a free port, then release it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let endpoint = format!("http://127.0.0.1:{port}/api/search");

    let client = ReqwestSearchClient::new(SearchSettings::new(endpoint)).unwrap();
    let err = client.search("term=x").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn invalid_endpoint_fails_before_sending() {
    let client = ReqwestSearchClient::new(SearchSettings::new("not a url")).unwrap();
    let err = client.search("term=x").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[tokio::test]
async fn configured_timeout_applies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = SearchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..SearchSettings::new(format!("{}/api/search", server.uri()))
    };
    let err = ReqwestSearchClient::new(settings)
        .unwrap()
        .search("term=slow")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3,4,5,6,7,8,9]"))
        .mount(&server)
        .await;

    let settings = SearchSettings {
        max_response_bytes: 8,
        ..SearchSettings::new(format!("{}/api/search", server.uri()))
    };
    let err = ReqwestSearchClient::new(settings)
        .unwrap()
        .search("term=big")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 8, .. }
    ));
}
