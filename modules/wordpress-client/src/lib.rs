pub mod error;
pub mod types;

pub use error::{Result, WordPressError};
pub use types::{CreatedPost, NewPost, PostStatus};

/// Client for a WordPress site's REST API, authenticated with an
/// application password over HTTP Basic auth.
///
/// `base_url` is the API root ending in `/wp-json/wp/v2`.
pub struct WordPressClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    app_password: String,
}

impl WordPressClient {
    pub fn new(base_url: &str, username: &str, app_password: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            app_password: app_password.to_string(),
        }
    }

    /// Create a post via `POST {base_url}/posts`.
    ///
    /// WordPress answers a creation with exactly 201. Any other status is an
    /// API rejection; its body is expected to be the standard WP error JSON
    /// (a non-JSON body is a parse error).
    pub async fn create_post(&self, post: &NewPost) -> Result<CreatedPost> {
        let url = format!("{}/posts", self.base_url);
        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.app_password))
            .json(post)
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() != 201 {
            let body = resp.text().await.unwrap_or_default();
            let message: serde_json::Value = serde_json::from_str(&body)?;
            return Err(WordPressError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let created: CreatedPost = serde_json::from_str(&body)?;
        tracing::debug!(id = created.id, link = ?created.link, "WordPress post created");
        Ok(created)
    }
}
