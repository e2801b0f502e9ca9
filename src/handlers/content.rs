// GET /api/content/* handlers

use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::error;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::content::{ContentError, ContentSource};

pub async fn diseases_handler(source: Arc<dyn ContentSource>) -> Result<Response, Infallible> {
    Ok(content_reply(source.diseases().await))
}

pub async fn boosters_handler(source: Arc<dyn ContentSource>) -> Result<Response, Infallible> {
    Ok(content_reply(source.boosters().await))
}

pub async fn blogs_handler(source: Arc<dyn ContentSource>) -> Result<Response, Infallible> {
    Ok(content_reply(source.blog_posts().await))
}

pub async fn hero_handler(source: Arc<dyn ContentSource>) -> Result<Response, Infallible> {
    Ok(content_reply(source.hero().await))
}

fn content_reply<T: Serialize>(result: Result<T, ContentError>) -> Response {
    match result {
        Ok(content) => warp::reply::with_status(warp::reply::json(&content), StatusCode::OK)
            .into_response(),
        Err(ContentError::NotFoundError(what)) => warp::reply::with_status(
            warp::reply::json(&serde_json::json!({ "message": format!("Not found: {}", what) })),
            StatusCode::NOT_FOUND,
        )
        .into_response(),
        Err(e) => {
            error!("Content request failed: {}", e);
            warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "message": "Internal server error" })),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        }
    }
}
