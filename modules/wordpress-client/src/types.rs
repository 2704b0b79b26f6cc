use serde::{Deserialize, Serialize};

/// Publication state of a WordPress post, as the REST API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Draft,
    Pending,
    Private,
}

/// Payload for `POST /posts`. Content is sent as-is (HTML or rich text).
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

impl NewPost {
    /// A post that goes live immediately (`status: "publish"`).
    pub fn published(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            status: PostStatus::Publish,
        }
    }
}

/// The subset of WordPress's post-creation response we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    pub id: i64,
    pub link: Option<String>,
    pub status: Option<String>,
}
