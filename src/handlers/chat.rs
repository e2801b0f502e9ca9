// POST /api/chat handler

use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::header::ALLOW;
use warp::http::Method;
use warp::reply::{Reply, Response};

use crate::chat::{ChatInput, ChatPipeline, RawBody};

/// Translate the HTTP request into a pipeline input and the pipeline's
/// response back into HTTP. Every method reaches the pipeline, which owns the
/// 405 decision.
pub async fn chat_handler(
    method: Method,
    body: Bytes,
    pipeline: Arc<ChatPipeline>,
) -> Result<Response, Infallible> {
    let input = ChatInput {
        method,
        body: RawBody::Bytes(body),
    };

    let response = pipeline.handle(input).await;

    let reply = warp::reply::with_status(warp::reply::json(&response.body), response.status);
    Ok(match response.allow {
        Some(allow) => warp::reply::with_header(reply, ALLOW, allow).into_response(),
        None => reply.into_response(),
    })
}
