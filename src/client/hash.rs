//! Hash commands

use super::{scan_options, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// HDEL key field [field ...]
    pub async fn hdel<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(&self, key: K, fields: F) -> Result<RV> {
        self.query(cmd("HDEL").arg(key).arg(fields)).await
    }

    /// HEXISTS key field
    pub async fn hexists<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(&self, key: K, field: F) -> Result<RV> {
        self.query(cmd("HEXISTS").arg(key).arg(field)).await
    }

    /// HGET key field
    pub async fn hget<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(&self, key: K, field: F) -> Result<RV> {
        self.query(cmd("HGET").arg(key).arg(field)).await
    }

    /// HGETALL key
    pub async fn hgetall<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("HGETALL").arg(key)).await
    }

    /// HINCRBY key field increment
    pub async fn hincr_by<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        field: F,
        increment: i64,
    ) -> Result<RV> {
        self.query(cmd("HINCRBY").arg(key).arg(field).arg(increment)).await
    }

    /// HINCRBYFLOAT key field increment
    pub async fn hincr_by_float<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        field: F,
        increment: f64,
    ) -> Result<RV> {
        self.query(cmd("HINCRBYFLOAT").arg(key).arg(field).arg(increment)).await
    }

    /// HKEYS key
    pub async fn hkeys<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("HKEYS").arg(key)).await
    }

    /// HLEN key
    pub async fn hlen<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("HLEN").arg(key)).await
    }

    /// HMGET key field [field ...]
    pub async fn hmget<K: ToRedisArgs, F: ToRedisArgs, RV: FromRedisValue>(&self, key: K, fields: F) -> Result<RV> {
        self.query(cmd("HMGET").arg(key).arg(fields)).await
    }

    /// HSET key field value
    pub async fn hset<K: ToRedisArgs, F: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        field: F,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("HSET").arg(key).arg(field).arg(value)).await
    }

    /// HSET key field value [field value ...]
    pub async fn hset_multiple<K: ToRedisArgs, F: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        items: &[(F, V)],
    ) -> Result<RV> {
        self.query(cmd("HSET").arg(key).arg(items)).await
    }

    /// HSETNX key field value
    pub async fn hset_nx<K: ToRedisArgs, F: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        field: F,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("HSETNX").arg(key).arg(field).arg(value)).await
    }

    /// HVALS key
    pub async fn hvals<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("HVALS").arg(key)).await
    }

    /// HRANDFIELD key count [WITHVALUES]
    pub async fn hrandfield<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        count: isize,
        with_values: bool,
    ) -> Result<RV> {
        let mut hrandfield = cmd("HRANDFIELD");
        hrandfield.arg(key).arg(count);
        if with_values {
            hrandfield.arg("WITHVALUES");
        }
        self.query(&hrandfield).await
    }

    /// HSCAN key cursor [MATCH pattern] [COUNT count]
    pub async fn hscan<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<RV> {
        let mut hscan = cmd("HSCAN");
        hscan.arg(key).arg(cursor);
        scan_options(&mut hscan, pattern, count);
        self.query(&hscan).await
    }
}
