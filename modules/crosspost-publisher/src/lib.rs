pub mod job;
pub mod publisher;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use job::{publish_post, PublishOutcome};
pub use publisher::{Publisher, PublisherRegistry, Receipt, WordPressPublisher};
pub use store::{PgPostStore, PostStore};
