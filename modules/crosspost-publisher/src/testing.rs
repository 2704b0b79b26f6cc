// Test mocks for the publish job, matching its two trait boundaries:
// - MemoryPostStore (PostStore) — HashMap-based id→post
// - ScriptedPublisher (Publisher) — fixed result, counts calls
//
// No network, no database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crosspost_common::{Platform, Post, PublishError, Result};

use crate::publisher::{Publisher, Receipt};
use crate::store::PostStore;

/// Build a post record for tests.
pub fn post(id: i64, platform: &str, title: &str, content: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        platform: platform.to_string(),
        created_at: Utc::now(),
    }
}

/// In-memory post store. Returns `Ok(None)` for unknown ids.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: HashMap<i64, Post>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, post: Post) -> Self {
        self.posts.insert(post.id, post);
        self
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn get(&self, id: i64) -> Result<Option<Post>> {
        Ok(self.posts.get(&id).cloned())
    }
}

/// What a ScriptedPublisher should answer.
#[derive(Debug, Clone)]
pub enum Script {
    Accept { remote_id: i64 },
    Reject { status: u16, message: serde_json::Value },
    TransportFailure(String),
}

/// Publisher that replays a fixed script and counts how often it was called.
pub struct ScriptedPublisher {
    platform: Platform,
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedPublisher {
    pub fn new(platform: Platform, script: Script) -> Self {
        Self {
            platform,
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Publisher for ScriptedPublisher {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn publish(&self, _post: &Post) -> std::result::Result<Receipt, PublishError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Accept { remote_id } => Ok(Receipt {
                remote_id: Some(*remote_id),
                url: Some(format!("https://example.com/?p={remote_id}")),
            }),
            Script::Reject { status, message } => Err(PublishError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            Script::TransportFailure(msg) => Err(PublishError::Transport(msg.clone())),
        }
    }
}
