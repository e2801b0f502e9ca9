// Route definitions

use bytes::Bytes;
use std::sync::Arc;
use warp::http::Method;
use warp::Filter;

use crate::chat::ChatPipeline;
use crate::content::ContentSource;
use crate::handlers;

/// Largest chat request body accepted before buffering (413 above this)
pub const MAX_CHAT_BODY_BYTES: u64 = 64 * 1024;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
    pub content: Arc<dyn ContentSource>,
}

impl AppState {
    pub fn new(pipeline: ChatPipeline, content: Arc<dyn ContentSource>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            content,
        }
    }
}

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api");

    let pipeline = state.pipeline.clone();
    let with_pipeline = warp::any().map(move || pipeline.clone());

    let content = state.content.clone();
    let with_content = warp::any().map(move || content.clone());

    let chat_path = api.and(warp::path("chat")).and(warp::path::end());

    // POST /api/chat
    let chat_post = chat_path
        .clone()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_CHAT_BODY_BYTES))
        .and(warp::body::bytes())
        .map(|body: Bytes| (Method::POST, body))
        .untuple_one();

    // Any other method on /api/chat; the pipeline answers 405
    let chat_other = chat_path
        .and(warp::method())
        .and_then(|method: Method| async move {
            if method == Method::POST {
                return Err(warp::reject::not_found());
            }
            Ok::<_, warp::Rejection>((method, Bytes::new()))
        })
        .untuple_one();

    let chat = chat_post
        .or(chat_other)
        .unify()
        .and(with_pipeline)
        .and_then(handlers::chat_handler);

    let content_path = api.and(warp::path("content"));

    // GET /api/content/diseases
    let diseases = content_path
        .clone()
        .and(warp::path("diseases"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_content.clone())
        .and_then(handlers::diseases_handler);

    // GET /api/content/boosters
    let boosters = content_path
        .clone()
        .and(warp::path("boosters"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_content.clone())
        .and_then(handlers::boosters_handler);

    // GET /api/content/blogs
    let blogs = content_path
        .clone()
        .and(warp::path("blogs"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_content.clone())
        .and_then(handlers::blogs_handler);

    // GET /api/content/hero
    let hero = content_path
        .and(warp::path("hero"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_content)
        .and_then(handlers::hero_handler);

    chat.or(diseases)
        .or(boosters)
        .or(blogs)
        .or(hero)
        .with(warp::trace::request())
}
