//! List commands
//!
//! Blocking variants take their timeout as a `Duration`; the server
//! receives it in (fractional) seconds. A zero timeout blocks forever on
//! the server side, so only a bound context can interrupt it.

use super::Client;
use crate::error::Result;
use redis::{cmd, Direction, FromRedisValue, LposOptions, ToRedisArgs};
use std::num::NonZeroUsize;
use std::time::Duration;

impl Client {
    /// BLPOP key [key ...] timeout
    pub async fn blpop<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K, timeout: Duration) -> Result<RV> {
        self.query(cmd("BLPOP").arg(keys).arg(timeout.as_secs_f64())).await
    }

    /// BRPOP key [key ...] timeout
    pub async fn brpop<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K, timeout: Duration) -> Result<RV> {
        self.query(cmd("BRPOP").arg(keys).arg(timeout.as_secs_f64())).await
    }

    /// BRPOPLPUSH source destination timeout
    pub async fn brpoplpush<S: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        source: S,
        destination: D,
        timeout: Duration,
    ) -> Result<RV> {
        self.query(
            cmd("BRPOPLPUSH")
                .arg(source)
                .arg(destination)
                .arg(timeout.as_secs_f64()),
        )
        .await
    }

    /// LINDEX key index
    pub async fn lindex<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, index: isize) -> Result<RV> {
        self.query(cmd("LINDEX").arg(key).arg(index)).await
    }

    /// LINSERT key BEFORE pivot element
    pub async fn linsert_before<K: ToRedisArgs, P: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        pivot: P,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("LINSERT").arg(key).arg("BEFORE").arg(pivot).arg(value))
            .await
    }

    /// LINSERT key AFTER pivot element
    pub async fn linsert_after<K: ToRedisArgs, P: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        pivot: P,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("LINSERT").arg(key).arg("AFTER").arg(pivot).arg(value))
            .await
    }

    /// LLEN key
    pub async fn llen<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("LLEN").arg(key)).await
    }

    /// LPOP key [count]
    pub async fn lpop<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: Option<NonZeroUsize>) -> Result<RV> {
        self.query(cmd("LPOP").arg(key).arg(count)).await
    }

    /// LPOS key element [RANK rank] [COUNT num] [MAXLEN len]
    pub async fn lpos<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        value: V,
        options: LposOptions,
    ) -> Result<RV> {
        self.query(cmd("LPOS").arg(key).arg(value).arg(options)).await
    }

    /// LPUSH key element [element ...]
    pub async fn lpush<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, values: V) -> Result<RV> {
        self.query(cmd("LPUSH").arg(key).arg(values)).await
    }

    /// LPUSHX key element [element ...]
    pub async fn lpush_x<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, values: V) -> Result<RV> {
        self.query(cmd("LPUSHX").arg(key).arg(values)).await
    }

    /// LRANGE key start stop
    pub async fn lrange<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, start: isize, stop: isize) -> Result<RV> {
        self.query(cmd("LRANGE").arg(key).arg(start).arg(stop)).await
    }

    /// LREM key count element
    pub async fn lrem<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: isize, value: V) -> Result<RV> {
        self.query(cmd("LREM").arg(key).arg(count).arg(value)).await
    }

    /// LSET key index element
    pub async fn lset<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, index: isize, value: V) -> Result<RV> {
        self.query(cmd("LSET").arg(key).arg(index).arg(value)).await
    }

    /// LTRIM key start stop
    pub async fn ltrim<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, start: isize, stop: isize) -> Result<RV> {
        self.query(cmd("LTRIM").arg(key).arg(start).arg(stop)).await
    }

    /// RPOP key [count]
    pub async fn rpop<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: Option<NonZeroUsize>) -> Result<RV> {
        self.query(cmd("RPOP").arg(key).arg(count)).await
    }

    /// RPOPLPUSH source destination
    pub async fn rpoplpush<S: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(&self, source: S, destination: D) -> Result<RV> {
        self.query(cmd("RPOPLPUSH").arg(source).arg(destination)).await
    }

    /// RPUSH key element [element ...]
    pub async fn rpush<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, values: V) -> Result<RV> {
        self.query(cmd("RPUSH").arg(key).arg(values)).await
    }

    /// RPUSHX key element [element ...]
    pub async fn rpush_x<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, values: V) -> Result<RV> {
        self.query(cmd("RPUSHX").arg(key).arg(values)).await
    }

    /// LMOVE source destination LEFT|RIGHT LEFT|RIGHT
    pub async fn lmove<S: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        source: S,
        destination: D,
        from: Direction,
        to: Direction,
    ) -> Result<RV> {
        self.query(cmd("LMOVE").arg(source).arg(destination).arg(from).arg(to))
            .await
    }

    /// BLMOVE source destination LEFT|RIGHT LEFT|RIGHT timeout
    pub async fn blmove<S: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        source: S,
        destination: D,
        from: Direction,
        to: Direction,
        timeout: Duration,
    ) -> Result<RV> {
        self.query(
            cmd("BLMOVE")
                .arg(source)
                .arg(destination)
                .arg(from)
                .arg(to)
                .arg(timeout.as_secs_f64()),
        )
        .await
    }
}
