// Platform dispatch: one Publisher implementation per destination,
// looked up in a registry keyed by platform.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crosspost_common::{Platform, Post, PublishError};
use wordpress_client::{NewPost, WordPressClient, WordPressError};

/// Proof of publication returned by a platform.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Platform-side id of the created resource.
    pub remote_id: Option<i64>,
    /// Public URL of the created resource, when the platform reports one.
    pub url: Option<String>,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Which platform this publisher handles.
    fn platform(&self) -> Platform;

    /// Push one post to the platform as a new published resource.
    async fn publish(&self, post: &Post) -> Result<Receipt, PublishError>;
}

/// Publishes posts to a WordPress site over its REST API.
pub struct WordPressPublisher {
    client: WordPressClient,
}

impl WordPressPublisher {
    pub fn new(client: WordPressClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for WordPressPublisher {
    fn platform(&self) -> Platform {
        Platform::WordPress
    }

    async fn publish(&self, post: &Post) -> Result<Receipt, PublishError> {
        let created = self
            .client
            .create_post(&NewPost::published(&post.title, &post.content))
            .await
            .map_err(map_wordpress_error)?;

        Ok(Receipt {
            remote_id: Some(created.id),
            url: created.link,
        })
    }
}

fn map_wordpress_error(err: WordPressError) -> PublishError {
    match err {
        WordPressError::Api { status, message } => PublishError::Rejected { status, message },
        WordPressError::Network(msg) => PublishError::Transport(msg),
        WordPressError::Parse(msg) => PublishError::Parse(msg),
    }
}

/// Registered publishers. Supporting a new platform means registering an
/// implementation here; the dispatch in the job stays untouched.
#[derive(Default)]
pub struct PublisherRegistry {
    publishers: HashMap<Platform, Arc<dyn Publisher>>,
}

impl PublisherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, publisher: Arc<dyn Publisher>) {
        self.publishers.insert(publisher.platform(), publisher);
    }

    pub fn get(&self, platform: Platform) -> Option<&Arc<dyn Publisher>> {
        self.publishers.get(&platform)
    }
}
