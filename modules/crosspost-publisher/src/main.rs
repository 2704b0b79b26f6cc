use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crosspost_common::Config;
use crosspost_publisher::{
    publish_post, PgPostStore, PublishOutcome, PublisherRegistry, WordPressPublisher,
};
use wordpress_client::WordPressClient;

/// Publish one stored post to its destination platform.
///
/// Invoked by the task queue with the id of the post to publish. Exits
/// nonzero on lookup or transport failure so the queue sees the job fail.
#[derive(Parser)]
struct Args {
    /// Id of the post to publish.
    post_id: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("crosspost_publisher=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!(post_id = args.post_id, "Crosspost publisher starting...");

    let config = Config::from_env();
    config.log_redacted();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;
    let store = PgPostStore::new(pool);

    let mut registry = PublisherRegistry::new();
    registry.register(Arc::new(WordPressPublisher::new(WordPressClient::new(
        &config.wordpress_base_url,
        &config.wordpress_username,
        &config.wordpress_app_password,
    ))));

    match publish_post(&store, &registry, args.post_id).await? {
        PublishOutcome::Published(receipt) => {
            println!(
                "Published post {} -> {}",
                args.post_id,
                receipt.url.as_deref().unwrap_or("(no link reported)")
            );
        }
        PublishOutcome::Rejected { status } => {
            println!("Post {} rejected by platform (status {status})", args.post_id);
        }
        PublishOutcome::UnsupportedPlatform(platform) => {
            println!("Post {} targets unsupported platform: {platform}", args.post_id);
        }
    }

    Ok(())
}
