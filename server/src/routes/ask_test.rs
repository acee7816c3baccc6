use super::*;
use crate::routes::app;
use crate::state::test_helpers::*;
use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

fn body(query: Option<&str>) -> Result<Json<AskBody>, JsonRejection> {
    Ok(Json(AskBody { query: query.map(str::to_owned) }))
}

// =========================================================================
// require_query
// =========================================================================

#[test]
fn require_query_accepts_text() {
    assert_eq!(require_query(body(Some("best tacos"))).unwrap(), "best tacos");
}

#[test]
fn require_query_rejects_missing() {
    assert!(matches!(require_query(body(None)), Err(RelayError::MissingQuery)));
}

#[test]
fn require_query_rejects_empty_and_blank() {
    assert!(matches!(require_query(body(Some(""))), Err(RelayError::MissingQuery)));
    assert!(matches!(require_query(body(Some("   "))), Err(RelayError::MissingQuery)));
}

// =========================================================================
// handler
// =========================================================================

#[tokio::test]
async fn ask_returns_upstream_answer_unchanged() {
    let mock = Arc::new(MockUpstream::answering(json!({ "answer": "X" })));
    let state = test_app_state(mock.clone());

    let Json(value) = ask(State(state), body(Some("who makes tacos?"))).await.unwrap();
    assert_eq!(value, json!({ "answer": "X" }));
    assert_eq!(mock.queries(), vec!["who makes tacos?"]);
}

#[tokio::test]
async fn ask_empty_query_never_calls_upstream() {
    let mock = Arc::new(MockUpstream::answering(json!({ "answer": "X" })));
    let state = test_app_state(mock.clone());

    let err = ask(State(state), body(Some(""))).await.unwrap_err();
    assert!(matches!(err, RelayError::MissingQuery));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn ask_upstream_failure_maps_to_relay_error() {
    let mock = Arc::new(MockUpstream::failing(UpstreamError::Timeout));
    let state = test_app_state(mock.clone());

    let err = ask(State(state), body(Some("tacos"))).await.unwrap_err();
    assert!(matches!(err, RelayError::Upstream(UpstreamError::Timeout)));
    assert_eq!(mock.calls(), 1);
}

// =========================================================================
// full route
// =========================================================================

#[tokio::test]
async fn route_relays_results_body_verbatim() {
    let upstream_body = json!({
        "query": "tacos",
        "results": [{ "name": "Taco Place", "location": { "city": "Austin", "state": "TX" }, "price": 2 }]
    });
    let mock = Arc::new(MockUpstream::answering(upstream_body.clone()));

    let (status, value) = call_json(app(test_app_state(mock)), ask_request(r#"{"query":"tacos"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, upstream_body);
}

#[tokio::test]
async fn route_empty_query_returns_400_body() {
    let mock = Arc::new(MockUpstream::answering(json!({ "answer": "X" })));

    let (status, value) = call_json(app(test_app_state(mock.clone())), ask_request(r#"{"query":""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({ "error": "Query parameter is required" }));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn route_missing_query_returns_400_body() {
    let mock = Arc::new(MockUpstream::answering(json!({ "answer": "X" })));

    let (status, value) = call_json(app(test_app_state(mock.clone())), ask_request("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Query parameter is required");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn route_malformed_json_returns_400_body() {
    let mock = Arc::new(MockUpstream::answering(json!({ "answer": "X" })));

    let (status, value) = call_json(app(test_app_state(mock.clone())), ask_request("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Query parameter is required");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn route_upstream_5xx_returns_generic_500() {
    let mock = Arc::new(MockUpstream::failing(UpstreamError::Status {
        status: 502,
        body: "Traceback (most recent call last)".into(),
    }));

    let (status, value) = call_json(app(test_app_state(mock)), ask_request(r#"{"query":"tacos"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value, json!({ "error": "AI request to Flask API failed" }));
}

#[tokio::test]
async fn route_failure_does_not_affect_next_request() {
    let mock = Arc::new(MockUpstream::new(vec![
        Err(UpstreamError::Timeout),
        Ok(json!({ "answer": "second time lucky" })),
    ]));
    let router = app(test_app_state(mock.clone()));

    let (first, _) = call_json(router.clone(), ask_request(r#"{"query":"a"}"#)).await;
    let (second, value) = call_json(router, ask_request(r#"{"query":"b"}"#)).await;
    assert_eq!(first, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(value["answer"], "second time lucky");
    assert_eq!(mock.calls(), 2);
}
