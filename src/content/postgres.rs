//! Document-store backed content source
//!
//! Every document is one JSONB row in `content_documents`, tagged with its
//! kind and ordered by `position` within that kind.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::connection::SharedPool;
use super::error::{ContentError, Result};
use super::seed;
use super::types::{BlogPost, Booster, ContentKind, Disease, HeroContent};
use super::ContentSource;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS content_documents (
    kind TEXT NOT NULL,
    position INTEGER NOT NULL,
    body JSONB NOT NULL,
    PRIMARY KEY (kind, position)
)";

const SELECT_BY_KIND: &str =
    "SELECT body FROM content_documents WHERE kind = $1 ORDER BY position";

const INSERT_DOCUMENT: &str =
    "INSERT INTO content_documents (kind, position, body) VALUES ($1, $2, $3)";

/// Content source reading documents from PostgreSQL
pub struct PostgresContent {
    pool: SharedPool,
}

impl PostgresContent {
    pub fn new(pool: SharedPool) -> Self {
        Self { pool }
    }

    /// Create the documents table if it does not exist
    pub async fn ensure_schema(&self) -> Result<()> {
        let pool = self.pool.get().await?;
        let client = pool.get().await?;
        client.batch_execute(CREATE_TABLE).await?;
        Ok(())
    }

    /// Insert the built-in catalogue when the table holds no documents.
    ///
    /// Returns the number of documents written.
    pub async fn seed_if_empty(&self) -> Result<usize> {
        let pool = self.pool.get().await?;
        let mut client = pool.get().await?;

        let row = client
            .query_one("SELECT COUNT(*) FROM content_documents", &[])
            .await?;
        let existing: i64 = row.get(0);
        if existing > 0 {
            debug!(existing, "Content documents present, skipping seed");
            return Ok(0);
        }

        let mut documents: Vec<(ContentKind, Value)> = Vec::new();
        push_documents(&mut documents, ContentKind::Disease, &seed::diseases())?;
        push_documents(&mut documents, ContentKind::Booster, &seed::boosters())?;
        push_documents(&mut documents, ContentKind::BlogPost, &seed::blog_posts())?;
        push_documents(&mut documents, ContentKind::Hero, &[seed::hero()])?;

        let tx = client.transaction().await?;
        let mut positions = std::collections::HashMap::new();
        for (kind, body) in &documents {
            let position: &mut i32 = positions.entry(kind.as_str()).or_insert(0);
            tx.execute(INSERT_DOCUMENT, &[&kind.as_str(), &*position, body])
                .await?;
            *position += 1;
        }
        tx.commit().await?;

        info!(count = documents.len(), "Seeded content documents");
        Ok(documents.len())
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: ContentKind) -> Result<Vec<T>> {
        let pool = self.pool.get().await?;
        let client = pool.get().await?;
        let rows = client.query(SELECT_BY_KIND, &[&kind.as_str()]).await?;

        rows.iter()
            .map(|row| {
                let body: Value = row.get("body");
                serde_json::from_value(body).map_err(ContentError::from)
            })
            .collect()
    }
}

fn push_documents<T: Serialize>(
    documents: &mut Vec<(ContentKind, Value)>,
    kind: ContentKind,
    items: &[T],
) -> Result<()> {
    for item in items {
        documents.push((kind, serde_json::to_value(item)?));
    }
    Ok(())
}

#[async_trait]
impl ContentSource for PostgresContent {
    async fn diseases(&self) -> Result<Vec<Disease>> {
        self.fetch(ContentKind::Disease).await
    }

    async fn boosters(&self) -> Result<Vec<Booster>> {
        self.fetch(ContentKind::Booster).await
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.fetch(ContentKind::BlogPost).await
    }

    async fn hero(&self) -> Result<HeroContent> {
        self.fetch(ContentKind::Hero)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFoundError("hero content".to_string()))
    }
}
