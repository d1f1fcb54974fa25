//! Boardwatch worker binary.
//!
//! Wires the production adapters together and runs the event listener as
//! the process's single long-lived task: Redis set store behind the
//! subscription registry, the dispatcher on top, and the pub/sub listener
//! feeding it until the channel closes or the process is interrupted.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use boardwatch::adapters::{LoggingSink, RedisEventListener, RedisSetStore};
use boardwatch::application::{EventDispatcher, SubscriptionRegistry};
use boardwatch::config::AppConfig;
use boardwatch::domain::KeySchema;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = redis::Client::open(config.redis.url.as_str())?;
    let conn = tokio::time::timeout(
        config.redis.timeout(),
        client.get_multiplexed_tokio_connection(),
    )
    .await??;

    let keys = KeySchema::new(&config.events.key_prefix);
    let store = Arc::new(RedisSetStore::new(conn));
    let registry = Arc::new(SubscriptionRegistry::with_session_ttl(
        store,
        keys.clone(),
        config.events.session_ttl(),
    ));
    let dispatcher = Arc::new(EventDispatcher::new(registry, Arc::new(LoggingSink::new())));
    let listener = RedisEventListener::new(client, keys.channel());

    tracing::info!(
        key_prefix = %config.events.key_prefix,
        session_ttl_secs = config.events.session_ttl_secs,
        "boardwatch worker starting"
    );

    tokio::select! {
        result = listener.run(dispatcher) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
