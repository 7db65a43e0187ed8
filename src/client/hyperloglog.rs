//! HyperLogLog commands

use super::Client;
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// PFADD key element [element ...]
    pub async fn pfadd<K: ToRedisArgs, E: ToRedisArgs, RV: FromRedisValue>(&self, key: K, elements: E) -> Result<RV> {
        self.query(cmd("PFADD").arg(key).arg(elements)).await
    }

    /// PFCOUNT key [key ...]
    pub async fn pfcount<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("PFCOUNT").arg(keys)).await
    }

    /// PFMERGE destkey sourcekey [sourcekey ...]
    pub async fn pfmerge<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, destination: D, sources: K) -> Result<RV> {
        self.query(cmd("PFMERGE").arg(destination).arg(sources)).await
    }
}
