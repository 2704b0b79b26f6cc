// Read access to the posts table. The table is owned by the authoring
// system; the publish job never writes to it.

use async_trait::async_trait;
use sqlx::PgPool;

use crosspost_common::{Post, Result};

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch a post by id. `Ok(None)` when no such post exists.
    async fn get(&self, id: i64) -> Result<Option<Post>>;
}

pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn get(&self, id: i64) -> Result<Option<Post>> {
        let row = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, platform, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
