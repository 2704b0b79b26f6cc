// Job semantics against the two trait boundaries, no network or database.

use std::sync::Arc;

use serde_json::json;

use crosspost_common::{CrosspostError, Platform, PublishError};
use crosspost_publisher::testing::{post, MemoryPostStore, Script, ScriptedPublisher};
use crosspost_publisher::{publish_post, PublishOutcome, PublisherRegistry};

fn registry_with(publisher: Arc<ScriptedPublisher>) -> PublisherRegistry {
    let mut registry = PublisherRegistry::new();
    registry.register(publisher);
    registry
}

#[tokio::test]
async fn publishes_wordpress_post() {
    let store = MemoryPostStore::new().with(post(1, "wordpress", "Hello World", "<p>hi</p>"));
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::Accept { remote_id: 42 },
    ));
    let registry = registry_with(publisher.clone());

    let outcome = publish_post(&store, &registry, 1).await.unwrap();

    match outcome {
        PublishOutcome::Published(receipt) => assert_eq!(receipt.remote_id, Some(42)),
        other => panic!("expected Published, got {other:?}"),
    }
    assert_eq!(publisher.calls(), 1);
}

#[tokio::test]
async fn remote_rejection_is_absorbed() {
    let store = MemoryPostStore::new().with(post(1, "wordpress", "Hello World", "body"));
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::Reject {
            status: 400,
            message: json!({ "message": "bad request" }),
        },
    ));
    let registry = registry_with(publisher.clone());

    let outcome = publish_post(&store, &registry, 1).await.unwrap();

    assert!(matches!(outcome, PublishOutcome::Rejected { status: 400 }));
    assert_eq!(publisher.calls(), 1);
}

#[tokio::test]
async fn unsupported_platform_makes_no_publish_call() {
    let store = MemoryPostStore::new().with(post(2, "medium", "Elsewhere", "body"));
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::Accept { remote_id: 1 },
    ));
    let registry = registry_with(publisher.clone());

    let outcome = publish_post(&store, &registry, 2).await.unwrap();

    match outcome {
        PublishOutcome::UnsupportedPlatform(platform) => assert_eq!(platform, "medium"),
        other => panic!("expected UnsupportedPlatform, got {other:?}"),
    }
    assert_eq!(publisher.calls(), 0);
}

#[tokio::test]
async fn unknown_platform_string_is_unsupported_too() {
    let store = MemoryPostStore::new().with(post(3, "substack", "Elsewhere", "body"));
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::Accept { remote_id: 1 },
    ));
    let registry = registry_with(publisher.clone());

    let outcome = publish_post(&store, &registry, 3).await.unwrap();

    assert!(matches!(outcome, PublishOutcome::UnsupportedPlatform(p) if p == "substack"));
    assert_eq!(publisher.calls(), 0);
}

#[tokio::test]
async fn missing_post_fails_before_any_publish_call() {
    let store = MemoryPostStore::new();
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::Accept { remote_id: 1 },
    ));
    let registry = registry_with(publisher.clone());

    let err = publish_post(&store, &registry, 7).await.unwrap_err();

    assert!(matches!(err, CrosspostError::PostNotFound(7)), "got {err:?}");
    assert_eq!(publisher.calls(), 0);
}

#[tokio::test]
async fn transport_failure_propagates() {
    let store = MemoryPostStore::new().with(post(1, "wordpress", "Hello World", "body"));
    let publisher = Arc::new(ScriptedPublisher::new(
        Platform::WordPress,
        Script::TransportFailure("connection refused".to_string()),
    ));
    let registry = registry_with(publisher.clone());

    let err = publish_post(&store, &registry, 1).await.unwrap_err();

    assert!(
        matches!(err, CrosspostError::Publish(PublishError::Transport(_))),
        "got {err:?}"
    );
}
