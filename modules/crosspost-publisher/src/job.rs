use tracing::{info, warn};

use crosspost_common::{CrosspostError, PublishError, Result};

use crate::publisher::{PublisherRegistry, Receipt};
use crate::store::PostStore;

/// How a publish job ended, for callers that want more than the logs.
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    Published(Receipt),
    /// The platform refused the post. Logged and absorbed.
    Rejected { status: u16 },
    /// No publisher registered for the post's platform. No request was made.
    UnsupportedPlatform(String),
}

/// Publish one stored post. One invocation per queue job; no retry, no
/// mutual exclusion between jobs for the same id.
///
/// Lookup and transport failures are fatal (`Err`, the job runner sees a
/// failure). A remote rejection or an unrecognized platform is logged and
/// absorbed into an `Ok` outcome.
pub async fn publish_post(
    store: &dyn PostStore,
    registry: &PublisherRegistry,
    post_id: i64,
) -> Result<PublishOutcome> {
    let post = store
        .get(post_id)
        .await?
        .ok_or(CrosspostError::PostNotFound(post_id))?;

    let publisher = match post.platform().and_then(|p| registry.get(p)) {
        Some(publisher) => publisher,
        None => {
            warn!(post_id, platform = post.platform.as_str(), "Unsupported platform");
            return Ok(PublishOutcome::UnsupportedPlatform(post.platform.clone()));
        }
    };

    match publisher.publish(&post).await {
        Ok(receipt) => {
            info!(
                post_id,
                title = post.title.as_str(),
                url = receipt.url.as_deref().unwrap_or(""),
                "Published post"
            );
            Ok(PublishOutcome::Published(receipt))
        }
        Err(PublishError::Rejected { status, message }) => {
            warn!(
                post_id,
                title = post.title.as_str(),
                status,
                %message,
                "Platform rejected post"
            );
            Ok(PublishOutcome::Rejected { status })
        }
        Err(err) => Err(err.into()),
    }
}
