use std::sync::Arc;
use std::time::Duration;

use marquee::api::{ApiError, HttpSuggestSource, SuggestSource, SuggestionItem};
use marquee::tui::debounce::DelayedTask;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn suggest_body(results: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "results": results })
}

async fn mock_suggest(server: &MockServer, q: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/search_suggest"))
        .and(query_param("q", q))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// HttpSuggestSource Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_parses_full_items() {
    let mock_server = MockServer::start().await;
    mock_suggest(
        &mock_server,
        "bat",
        suggest_body(serde_json::json!([{
            "id": 1,
            "title": "Batman",
            "poster_path": "/bat.jpg",
            "release_date": "2022-03-01",
            "vote_average": 7.8
        }])),
    )
    .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    let results = assert_ok!(source.suggest("bat").await);

    assert_eq!(
        results,
        vec![SuggestionItem {
            id: 1,
            title: "Batman".to_string(),
            poster_path: Some("/bat.jpg".to_string()),
            release_date: Some("2022-03-01".to_string()),
            vote_average: Some(7.8),
        }]
    );
}

#[tokio::test]
async fn test_query_is_url_encoded() {
    let mock_server = MockServer::start().await;
    // wiremock matches against the decoded value; the client must have
    // percent-encoded the space and the non-ASCII char on the wire.
    mock_suggest(
        &mock_server,
        "kelebeğin rüyası",
        suggest_body(serde_json::json!([])),
    )
    .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    let results = assert_ok!(source.suggest("kelebeğin rüyası").await);
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_null_optional_fields_parse() {
    let mock_server = MockServer::start().await;
    mock_suggest(
        &mock_server,
        "ob",
        suggest_body(serde_json::json!([{
            "id": 9,
            "title": "Obscurity",
            "poster_path": null,
            "release_date": null,
            "vote_average": null
        }])),
    )
    .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    let results = assert_ok!(source.suggest("ob").await);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].poster_path, None);
    assert_eq!(results[0].release_year(), None);
    assert_eq!(results[0].score_label(), None);
}

#[tokio::test]
async fn test_missing_results_key_is_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search_suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    let results = assert_ok!(source.suggest("xyz123").await);
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search_suggest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    match source.suggest("bat").await {
        Err(ApiError::Api { status }) => assert_eq!(status, 500),
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search_suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let source = HttpSuggestSource::new(mock_server.uri());
    assert!(matches!(
        source.suggest("bat").await,
        Err(ApiError::Parse(_))
    ));
}

#[tokio::test]
async fn test_connection_refused_maps_to_network_error() {
    // Nothing listens on this port.
    let source = HttpSuggestSource::new("http://127.0.0.1:1".to_string());
    assert!(matches!(
        source.suggest("bat").await,
        Err(ApiError::Network(_))
    ));
}

// ============================================================================
// Debounced Fetch Tests
// ============================================================================

/// Rapid keystrokes inside the debounce window must collapse to exactly
/// one request, carrying the final query.
#[tokio::test]
async fn test_rapid_input_collapses_to_one_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search_suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggest_body(serde_json::json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source: Arc<dyn SuggestSource> = Arc::new(HttpSuggestSource::new(mock_server.uri()));
    let mut timer = DelayedTask::new(Duration::from_millis(100));

    for query in ["b", "ba", "bat"] {
        let source = source.clone();
        let query = query.to_string();
        timer.schedule(async move {
            let _ = source.suggest(&query).await;
        });
    }

    tokio::time::sleep(Duration::from_millis(300)).await;

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().unwrap().contains("q=bat"));
}
