mod common;

use serde_json::{json, Value};
use std::sync::Arc;
use warp::http::StatusCode;

use common::{pipeline_with, unconfigured_pipeline, StubProvider};
use nit_backend::chat::ChatPipeline;
use nit_backend::content::StaticContent;
use nit_backend::routes::{configure_routes, AppState, MAX_CHAT_BODY_BYTES};

fn state(pipeline: ChatPipeline) -> AppState {
    AppState::new(pipeline, Arc::new(StaticContent))
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is not JSON")
}

#[tokio::test]
async fn test_post_chat_returns_reply() {
    let provider = StubProvider::replying("Focus on iodine and selenium.");
    let routes = configure_routes(state(pipeline_with(provider.clone())));

    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .header("content-type", "application/json")
        .body(r#"{"messages":[{"role":"user","content":"What helps with thyroid issues?"}]}"#)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.body()),
        json!({"reply": "Focus on iodine and selenium."})
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_post_chat_without_content_type() {
    let provider = StubProvider::replying("Rest.");
    let routes = configure_routes(state(pipeline_with(provider)));

    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .body(r#"{"prompt":"Tired all the time"}"#)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.body())["reply"], "Rest.");
}

#[tokio::test]
async fn test_post_chat_empty_messages() {
    let provider = StubProvider::replying("unused");
    let routes = configure_routes(state(pipeline_with(provider.clone())));

    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"messages": []}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.body())["message"],
        "Invalid request body: expected messages array with content."
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_get_chat_is_method_not_allowed() {
    let provider = StubProvider::replying("unused");
    let routes = configure_routes(state(pipeline_with(provider.clone())));

    let response = warp::test::request()
        .method("GET")
        .path("/api/chat")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["allow"], "POST");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_oversized_chat_body_is_rejected() {
    let provider = StubProvider::replying("unused");
    let routes = configure_routes(state(pipeline_with(provider.clone())));

    let padding = "a".repeat(MAX_CHAT_BODY_BYTES as usize + 1);
    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .header("content-type", "application/json")
        .body(format!(r#"{{"message":"{}"}}"#, padding))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_delete_chat_is_method_not_allowed() {
    let provider = StubProvider::replying("unused");
    let routes = configure_routes(state(pipeline_with(provider.clone())));

    let response = warp::test::request()
        .method("DELETE")
        .path("/api/chat")
        .body("ignored")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["allow"], "POST");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_missing_credential_over_http() {
    let provider = StubProvider::replying("unused");
    let routes = configure_routes(state(unconfigured_pipeline(provider.clone())));

    let response = warp::test::request()
        .method("POST")
        .path("/api/chat")
        .json(&json!({"messages": [{"role": "user", "content": "Hello"}]}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response.body()),
        json!({"message": "Server misconfiguration: missing OpenAI API key."})
    );
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_content_endpoints() {
    let routes = configure_routes(state(pipeline_with(StubProvider::replying("unused"))));

    let diseases = warp::test::request()
        .path("/api/content/diseases")
        .reply(&routes)
        .await;
    assert_eq!(diseases.status(), StatusCode::OK);
    let diseases = json_body(diseases.body());
    assert_eq!(diseases.as_array().unwrap().len(), 3);
    assert_eq!(diseases[1]["name"], "Chronic Lyme");

    let boosters = warp::test::request()
        .path("/api/content/boosters")
        .reply(&routes)
        .await;
    assert_eq!(json_body(boosters.body())[0]["focus"], "Adaptive immune system rewiring with botanicals and micronutrients.");

    let blogs = warp::test::request()
        .path("/api/content/blogs")
        .reply(&routes)
        .await;
    assert_eq!(json_body(blogs.body())[0]["id"], 1);

    let hero = warp::test::request()
        .path("/api/content/hero")
        .reply(&routes)
        .await;
    assert_eq!(
        json_body(hero.body())["headline"],
        "Personalized Natural Immunotherapy"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let routes = configure_routes(state(pipeline_with(StubProvider::replying("unused"))));

    let response = warp::test::request()
        .path("/api/content/recipes")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
