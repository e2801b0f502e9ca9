use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nit_backend::chat::{ChatPipeline, ChatSettings, ProviderFactory};
use nit_backend::config::AppConfig;
use nit_backend::content::{
    ContentSource, PostgresContent, SharedPool, StaticContent,
};
use nit_backend::llm::create_provider;
use nit_backend::routes::{configure_routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("Failed to read configuration")?;

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; chat requests will fail until it is configured");
    }

    let settings =
        ChatSettings::new(config.openai_api_key.clone()).with_model(config.openai_model.clone());
    let base_url = config.openai_base_url.clone();
    let timeout = config.openai_timeout;
    let factory: ProviderFactory =
        Box::new(move |api_key: &str| create_provider(api_key, &base_url, timeout));
    let pipeline = ChatPipeline::new(settings, factory);

    let content = build_content_source(&config).await?;

    let routes = configure_routes(AppState::new(pipeline, content));

    let addr = config.socket_addr();
    info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}

async fn build_content_source(config: &AppConfig) -> anyhow::Result<Arc<dyn ContentSource>> {
    let Some(store_config) = config.document_store().context("Invalid DATABASE_URL")? else {
        info!("No document store configured, serving built-in content");
        return Ok(Arc::new(StaticContent));
    };
    let store = PostgresContent::new(SharedPool::new(store_config));

    // The store stays usable if the database is down at startup; the shared
    // pool retries on the next request.
    match store.ensure_schema().await {
        Ok(()) => {
            if let Err(e) = store.seed_if_empty().await {
                warn!("Failed to seed content documents: {}", e);
            }
        }
        Err(e) => warn!("Document store unavailable at startup: {}", e),
    }

    Ok(Arc::new(store))
}
