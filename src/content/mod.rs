//! Informational content: diseases, boosters, blog posts and hero text
//!
//! Content comes either from the built-in catalogue ([`StaticContent`]) or
//! from a PostgreSQL document table ([`PostgresContent`]).

pub mod connection;
pub mod error;
pub mod postgres;
pub mod seed;
pub mod types;

use async_trait::async_trait;

pub use connection::{DocumentStoreConfig, SharedPool};
pub use error::{ContentError, Result};
pub use postgres::PostgresContent;
pub use seed::StaticContent;
pub use types::{BlogPost, Booster, ContentKind, Disease, HeroContent};

/// Read access to the content catalogue
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn diseases(&self) -> Result<Vec<Disease>>;

    async fn boosters(&self) -> Result<Vec<Booster>>;

    async fn blog_posts(&self) -> Result<Vec<BlogPost>>;

    async fn hero(&self) -> Result<HeroContent>;
}
