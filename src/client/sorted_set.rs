//! Sorted set commands

use super::{scan_options, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};
use std::time::Duration;

impl Client {
    /// BZPOPMAX key [key ...] timeout
    pub async fn bzpopmax<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K, timeout: Duration) -> Result<RV> {
        self.query(cmd("BZPOPMAX").arg(keys).arg(timeout.as_secs_f64())).await
    }

    /// BZPOPMIN key [key ...] timeout
    pub async fn bzpopmin<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K, timeout: Duration) -> Result<RV> {
        self.query(cmd("BZPOPMIN").arg(keys).arg(timeout.as_secs_f64())).await
    }

    /// ZADD key score member
    pub async fn zadd<K: ToRedisArgs, S: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        score: S,
        member: M,
    ) -> Result<RV> {
        self.query(cmd("ZADD").arg(key).arg(score).arg(member)).await
    }

    /// ZADD key score member [score member ...]
    pub async fn zadd_multiple<K: ToRedisArgs, S: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        items: &[(S, M)],
    ) -> Result<RV> {
        self.query(cmd("ZADD").arg(key).arg(items)).await
    }

    /// ZADD key [NX|XX] [GT|LT] [CH] [INCR] score member [score member ...]
    ///
    /// `options` is sent before the pairs, e.g. `&["NX", "CH"]`.
    pub async fn zadd_options<K: ToRedisArgs, O: ToRedisArgs, S: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        options: O,
        items: &[(S, M)],
    ) -> Result<RV> {
        self.query(cmd("ZADD").arg(key).arg(options).arg(items)).await
    }

    /// ZCARD key
    pub async fn zcard<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("ZCARD").arg(key)).await
    }

    /// ZCOUNT key min max
    pub async fn zcount<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZCOUNT").arg(key).arg(min).arg(max)).await
    }

    /// ZLEXCOUNT key min max
    pub async fn zlexcount<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZLEXCOUNT").arg(key).arg(min).arg(max)).await
    }

    /// ZINCRBY key increment member
    pub async fn zincr_by<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        increment: f64,
        member: M,
    ) -> Result<RV> {
        self.query(cmd("ZINCRBY").arg(key).arg(increment).arg(member)).await
    }

    /// ZINTER numkeys key [key ...]
    pub async fn zinter<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZINTER").arg(keys.len()).arg(keys)).await
    }

    /// ZINTER numkeys key [key ...] WITHSCORES
    pub async fn zinter_with_scores<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZINTER").arg(keys.len()).arg(keys).arg("WITHSCORES"))
            .await
    }

    /// ZINTERSTORE destination numkeys key [key ...]
    pub async fn zinterstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        destination: D,
        keys: &[K],
    ) -> Result<RV> {
        self.query(cmd("ZINTERSTORE").arg(destination).arg(keys.len()).arg(keys))
            .await
    }

    /// ZMSCORE key member [member ...]
    pub async fn zmscore<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("ZMSCORE").arg(key).arg(members)).await
    }

    /// ZPOPMAX key count
    pub async fn zpopmax<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: isize) -> Result<RV> {
        self.query(cmd("ZPOPMAX").arg(key).arg(count)).await
    }

    /// ZPOPMIN key count
    pub async fn zpopmin<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: isize) -> Result<RV> {
        self.query(cmd("ZPOPMIN").arg(key).arg(count)).await
    }

    /// ZRANGE key start stop
    pub async fn zrange<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, start: isize, stop: isize) -> Result<RV> {
        self.query(cmd("ZRANGE").arg(key).arg(start).arg(stop)).await
    }

    /// ZRANGE key start stop WITHSCORES
    pub async fn zrange_with_scores<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: isize,
        stop: isize,
    ) -> Result<RV> {
        self.query(cmd("ZRANGE").arg(key).arg(start).arg(stop).arg("WITHSCORES"))
            .await
    }

    /// ZRANGEBYSCORE key min max
    pub async fn zrange_by_score<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZRANGEBYSCORE").arg(key).arg(min).arg(max)).await
    }

    /// ZRANGEBYSCORE key min max WITHSCORES
    pub async fn zrange_by_score_with_scores<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(
            cmd("ZRANGEBYSCORE")
                .arg(key)
                .arg(min)
                .arg(max)
                .arg("WITHSCORES"),
        )
        .await
    }

    /// ZRANGEBYSCORE key min max LIMIT offset count
    pub async fn zrange_by_score_limit<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
        offset: isize,
        count: isize,
    ) -> Result<RV> {
        self.query(
            cmd("ZRANGEBYSCORE")
                .arg(key)
                .arg(min)
                .arg(max)
                .arg("LIMIT")
                .arg(offset)
                .arg(count),
        )
        .await
    }

    /// ZRANGEBYLEX key min max
    pub async fn zrange_by_lex<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZRANGEBYLEX").arg(key).arg(min).arg(max)).await
    }

    /// ZRANGESTORE dst src min max [BYSCORE|BYLEX] [REV] [LIMIT offset count]
    pub async fn zrangestore<D: ToRedisArgs, S: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, O: ToRedisArgs, RV: FromRedisValue>(
        &self,
        destination: D,
        source: S,
        min: MIN,
        max: MAX,
        options: O,
    ) -> Result<RV> {
        self.query(
            cmd("ZRANGESTORE")
                .arg(destination)
                .arg(source)
                .arg(min)
                .arg(max)
                .arg(options),
        )
        .await
    }

    /// ZRANK key member
    pub async fn zrank<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, member: M) -> Result<RV> {
        self.query(cmd("ZRANK").arg(key).arg(member)).await
    }

    /// ZREM key member [member ...]
    pub async fn zrem<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("ZREM").arg(key).arg(members)).await
    }

    /// ZREMRANGEBYRANK key start stop
    pub async fn zrem_range_by_rank<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: isize,
        stop: isize,
    ) -> Result<RV> {
        self.query(cmd("ZREMRANGEBYRANK").arg(key).arg(start).arg(stop)).await
    }

    /// ZREMRANGEBYSCORE key min max
    pub async fn zrem_range_by_score<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZREMRANGEBYSCORE").arg(key).arg(min).arg(max)).await
    }

    /// ZREMRANGEBYLEX key min max
    pub async fn zrem_range_by_lex<K: ToRedisArgs, MIN: ToRedisArgs, MAX: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min: MIN,
        max: MAX,
    ) -> Result<RV> {
        self.query(cmd("ZREMRANGEBYLEX").arg(key).arg(min).arg(max)).await
    }

    /// ZREVRANGE key start stop
    pub async fn zrevrange<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, start: isize, stop: isize) -> Result<RV> {
        self.query(cmd("ZREVRANGE").arg(key).arg(start).arg(stop)).await
    }

    /// ZREVRANGE key start stop WITHSCORES
    pub async fn zrevrange_with_scores<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: isize,
        stop: isize,
    ) -> Result<RV> {
        self.query(cmd("ZREVRANGE").arg(key).arg(start).arg(stop).arg("WITHSCORES"))
            .await
    }

    /// ZREVRANGEBYSCORE key max min
    pub async fn zrevrange_by_score<K: ToRedisArgs, MAX: ToRedisArgs, MIN: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        max: MAX,
        min: MIN,
    ) -> Result<RV> {
        self.query(cmd("ZREVRANGEBYSCORE").arg(key).arg(max).arg(min)).await
    }

    /// ZREVRANGEBYSCORE key max min WITHSCORES
    pub async fn zrevrange_by_score_with_scores<K: ToRedisArgs, MAX: ToRedisArgs, MIN: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        max: MAX,
        min: MIN,
    ) -> Result<RV> {
        self.query(
            cmd("ZREVRANGEBYSCORE")
                .arg(key)
                .arg(max)
                .arg(min)
                .arg("WITHSCORES"),
        )
        .await
    }

    /// ZREVRANGEBYLEX key max min
    pub async fn zrevrange_by_lex<K: ToRedisArgs, MAX: ToRedisArgs, MIN: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        max: MAX,
        min: MIN,
    ) -> Result<RV> {
        self.query(cmd("ZREVRANGEBYLEX").arg(key).arg(max).arg(min)).await
    }

    /// ZREVRANK key member
    pub async fn zrevrank<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, member: M) -> Result<RV> {
        self.query(cmd("ZREVRANK").arg(key).arg(member)).await
    }

    /// ZSCORE key member
    pub async fn zscore<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, member: M) -> Result<RV> {
        self.query(cmd("ZSCORE").arg(key).arg(member)).await
    }

    /// ZUNION numkeys key [key ...]
    pub async fn zunion<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZUNION").arg(keys.len()).arg(keys)).await
    }

    /// ZUNION numkeys key [key ...] WITHSCORES
    pub async fn zunion_with_scores<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZUNION").arg(keys.len()).arg(keys).arg("WITHSCORES"))
            .await
    }

    /// ZUNIONSTORE destination numkeys key [key ...]
    pub async fn zunionstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        destination: D,
        keys: &[K],
    ) -> Result<RV> {
        self.query(cmd("ZUNIONSTORE").arg(destination).arg(keys.len()).arg(keys))
            .await
    }

    /// ZRANDMEMBER key count [WITHSCORES]
    pub async fn zrandmember<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        count: isize,
        with_scores: bool,
    ) -> Result<RV> {
        let mut zrandmember = cmd("ZRANDMEMBER");
        zrandmember.arg(key).arg(count);
        if with_scores {
            zrandmember.arg("WITHSCORES");
        }
        self.query(&zrandmember).await
    }

    /// ZDIFF numkeys key [key ...]
    pub async fn zdiff<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZDIFF").arg(keys.len()).arg(keys)).await
    }

    /// ZDIFF numkeys key [key ...] WITHSCORES
    pub async fn zdiff_with_scores<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K]) -> Result<RV> {
        self.query(cmd("ZDIFF").arg(keys.len()).arg(keys).arg("WITHSCORES"))
            .await
    }

    /// ZDIFFSTORE destination numkeys key [key ...]
    pub async fn zdiffstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        destination: D,
        keys: &[K],
    ) -> Result<RV> {
        self.query(cmd("ZDIFFSTORE").arg(destination).arg(keys.len()).arg(keys))
            .await
    }

    /// ZSCAN key cursor [MATCH pattern] [COUNT count]
    pub async fn zscan<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<RV> {
        let mut zscan = cmd("ZSCAN");
        zscan.arg(key).arg(cursor);
        scan_options(&mut zscan, pattern, count);
        self.query(&zscan).await
    }
}
