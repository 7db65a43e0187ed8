//! Publish/subscribe commands
//!
//! PUBLISH and the PUBSUB introspection commands use pooled connections.
//! Subscriptions need a dedicated connection, opened from the plain client;
//! the context only governs opening it and sending the subscription.

use super::Client;
use crate::error::{Error, Result};
use redis::aio::PubSub;
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// PUBLISH channel message
    pub async fn publish<C: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, channel: C, message: M) -> Result<RV> {
        self.query(cmd("PUBLISH").arg(channel).arg(message)).await
    }

    /// PUBSUB CHANNELS [pattern]
    pub async fn pubsub_channels<RV: FromRedisValue>(&self, pattern: &str) -> Result<RV> {
        let mut channels = cmd("PUBSUB");
        channels.arg("CHANNELS");
        if !pattern.is_empty() {
            channels.arg(pattern);
        }
        self.query(&channels).await
    }

    /// PUBSUB NUMSUB [channel ...]
    pub async fn pubsub_numsub<C: ToRedisArgs, RV: FromRedisValue>(&self, channels: C) -> Result<RV> {
        self.query(cmd("PUBSUB").arg("NUMSUB").arg(channels)).await
    }

    /// PUBSUB NUMPAT
    pub async fn pubsub_numpat<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("PUBSUB").arg("NUMPAT")).await
    }

    /// SUBSCRIBE channel [channel ...] on a new dedicated connection
    ///
    /// Read messages with `PubSub::on_message`.
    pub async fn subscribe<C: ToRedisArgs>(&self, channels: C) -> Result<PubSub> {
        self.governed(async move {
            let mut pubsub = self.backend.client.get_async_pubsub().await?;
            pubsub.subscribe(channels).await?;
            Ok::<_, Error>(pubsub)
        })
        .await
    }

    /// PSUBSCRIBE pattern [pattern ...] on a new dedicated connection
    pub async fn psubscribe<P: ToRedisArgs>(&self, patterns: P) -> Result<PubSub> {
        self.governed(async move {
            let mut pubsub = self.backend.client.get_async_pubsub().await?;
            pubsub.psubscribe(patterns).await?;
            Ok::<_, Error>(pubsub)
        })
        .await
    }
}
