//! Stream commands
//!
//! Replies decode into the `redis::streams` reply types
//! (`StreamReadReply`, `StreamRangeReply`, `StreamPendingReply`, ...)
//! or any other `FromRedisValue` the caller picks.

use super::{millis, Client};
use crate::error::Result;
use redis::streams::{StreamClaimOptions, StreamMaxlen, StreamReadOptions};
use redis::{cmd, FromRedisValue, ToRedisArgs};
use std::time::Duration;

impl Client {
    /// XADD key id field value [field value ...]
    pub async fn xadd<K: ToRedisArgs, ID: ToRedisArgs, F: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        id: ID,
        items: &[(F, V)],
    ) -> Result<RV> {
        self.query(cmd("XADD").arg(key).arg(id).arg(items)).await
    }

    /// XADD key MAXLEN [=|~] threshold id field value [field value ...]
    pub async fn xadd_maxlen<K: ToRedisArgs, ID: ToRedisArgs, F: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        maxlen: StreamMaxlen,
        id: ID,
        items: &[(F, V)],
    ) -> Result<RV> {
        self.query(cmd("XADD").arg(key).arg(maxlen).arg(id).arg(items)).await
    }

    /// XDEL key id [id ...]
    pub async fn xdel<K: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(&self, key: K, ids: &[ID]) -> Result<RV> {
        self.query(cmd("XDEL").arg(key).arg(ids)).await
    }

    /// XLEN key
    pub async fn xlen<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("XLEN").arg(key)).await
    }

    /// XRANGE key start end
    pub async fn xrange<K: ToRedisArgs, S: ToRedisArgs, E: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: S,
        end: E,
    ) -> Result<RV> {
        self.query(cmd("XRANGE").arg(key).arg(start).arg(end)).await
    }

    /// XRANGE key start end COUNT count
    pub async fn xrange_count<K: ToRedisArgs, S: ToRedisArgs, E: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: S,
        end: E,
        count: usize,
    ) -> Result<RV> {
        self.query(
            cmd("XRANGE")
                .arg(key)
                .arg(start)
                .arg(end)
                .arg("COUNT")
                .arg(count),
        )
        .await
    }

    /// XREVRANGE key end start
    pub async fn xrevrange<K: ToRedisArgs, E: ToRedisArgs, S: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        end: E,
        start: S,
    ) -> Result<RV> {
        self.query(cmd("XREVRANGE").arg(key).arg(end).arg(start)).await
    }

    /// XREVRANGE key end start COUNT count
    pub async fn xrevrange_count<K: ToRedisArgs, E: ToRedisArgs, S: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        end: E,
        start: S,
        count: usize,
    ) -> Result<RV> {
        self.query(
            cmd("XREVRANGE")
                .arg(key)
                .arg(end)
                .arg(start)
                .arg("COUNT")
                .arg(count),
        )
        .await
    }

    /// XREAD STREAMS key [key ...] id [id ...]
    pub async fn xread<K: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(&self, keys: &[K], ids: &[ID]) -> Result<RV> {
        self.query(cmd("XREAD").arg("STREAMS").arg(keys).arg(ids)).await
    }

    /// XREAD or XREADGROUP with COUNT, BLOCK, GROUP and NOACK options
    ///
    /// Options carrying a group are sent as XREADGROUP. A BLOCK option
    /// holds the pooled connection for its whole duration.
    pub async fn xread_options<K: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        keys: &[K],
        ids: &[ID],
        options: &StreamReadOptions,
    ) -> Result<RV> {
        let name = if options.read_only() { "XREAD" } else { "XREADGROUP" };
        self.query(cmd(name).arg(options).arg("STREAMS").arg(keys).arg(ids))
            .await
    }

    /// XGROUP CREATE key group id
    pub async fn xgroup_create<K: ToRedisArgs, G: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        id: ID,
    ) -> Result<RV> {
        self.query(cmd("XGROUP").arg("CREATE").arg(key).arg(group).arg(id))
            .await
    }

    /// XGROUP CREATE key group id MKSTREAM
    pub async fn xgroup_create_mkstream<K: ToRedisArgs, G: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        id: ID,
    ) -> Result<RV> {
        self.query(
            cmd("XGROUP")
                .arg("CREATE")
                .arg(key)
                .arg(group)
                .arg(id)
                .arg("MKSTREAM"),
        )
        .await
    }

    /// XGROUP SETID key group id
    pub async fn xgroup_setid<K: ToRedisArgs, G: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        id: ID,
    ) -> Result<RV> {
        self.query(cmd("XGROUP").arg("SETID").arg(key).arg(group).arg(id))
            .await
    }

    /// XGROUP DESTROY key group
    pub async fn xgroup_destroy<K: ToRedisArgs, G: ToRedisArgs, RV: FromRedisValue>(&self, key: K, group: G) -> Result<RV> {
        self.query(cmd("XGROUP").arg("DESTROY").arg(key).arg(group)).await
    }

    /// XGROUP CREATECONSUMER key group consumer
    pub async fn xgroup_createconsumer<K: ToRedisArgs, G: ToRedisArgs, C: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        consumer: C,
    ) -> Result<RV> {
        self.query(
            cmd("XGROUP")
                .arg("CREATECONSUMER")
                .arg(key)
                .arg(group)
                .arg(consumer),
        )
        .await
    }

    /// XGROUP DELCONSUMER key group consumer
    pub async fn xgroup_delconsumer<K: ToRedisArgs, G: ToRedisArgs, C: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        consumer: C,
    ) -> Result<RV> {
        self.query(
            cmd("XGROUP")
                .arg("DELCONSUMER")
                .arg(key)
                .arg(group)
                .arg(consumer),
        )
        .await
    }

    /// XACK key group id [id ...]
    pub async fn xack<K: ToRedisArgs, G: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        ids: &[ID],
    ) -> Result<RV> {
        self.query(cmd("XACK").arg(key).arg(group).arg(ids)).await
    }

    /// XPENDING key group
    pub async fn xpending<K: ToRedisArgs, G: ToRedisArgs, RV: FromRedisValue>(&self, key: K, group: G) -> Result<RV> {
        self.query(cmd("XPENDING").arg(key).arg(group)).await
    }

    /// XPENDING key group start end count
    pub async fn xpending_count<K: ToRedisArgs, G: ToRedisArgs, S: ToRedisArgs, E: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        start: S,
        end: E,
        count: usize,
    ) -> Result<RV> {
        self.query(
            cmd("XPENDING")
                .arg(key)
                .arg(group)
                .arg(start)
                .arg(end)
                .arg(count),
        )
        .await
    }

    /// XCLAIM key group consumer min-idle-time id [id ...]
    pub async fn xclaim<K: ToRedisArgs, G: ToRedisArgs, C: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        consumer: C,
        min_idle: Duration,
        ids: &[ID],
    ) -> Result<RV> {
        self.query(
            cmd("XCLAIM")
                .arg(key)
                .arg(group)
                .arg(consumer)
                .arg(millis(min_idle))
                .arg(ids),
        )
        .await
    }

    /// XCLAIM key group consumer min-idle-time id [id ...] [IDLE ...] [JUSTID] ...
    pub async fn xclaim_options<K: ToRedisArgs, G: ToRedisArgs, C: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        consumer: C,
        min_idle: Duration,
        ids: &[ID],
        options: StreamClaimOptions,
    ) -> Result<RV> {
        self.query(
            cmd("XCLAIM")
                .arg(key)
                .arg(group)
                .arg(consumer)
                .arg(millis(min_idle))
                .arg(ids)
                .arg(options),
        )
        .await
    }

    /// XAUTOCLAIM key group consumer min-idle-time start COUNT count
    pub async fn xautoclaim<K: ToRedisArgs, G: ToRedisArgs, C: ToRedisArgs, S: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        group: G,
        consumer: C,
        min_idle: Duration,
        start: S,
        count: usize,
    ) -> Result<RV> {
        self.query(
            cmd("XAUTOCLAIM")
                .arg(key)
                .arg(group)
                .arg(consumer)
                .arg(millis(min_idle))
                .arg(start)
                .arg("COUNT")
                .arg(count),
        )
        .await
    }

    /// XTRIM key MAXLEN [=|~] threshold
    pub async fn xtrim<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, maxlen: StreamMaxlen) -> Result<RV> {
        self.query(cmd("XTRIM").arg(key).arg(maxlen)).await
    }

    /// XTRIM key MINID [~] threshold
    pub async fn xtrim_minid<K: ToRedisArgs, ID: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        min_id: ID,
        approximate: bool,
    ) -> Result<RV> {
        let mut xtrim = cmd("XTRIM");
        xtrim.arg(key).arg("MINID");
        if approximate {
            xtrim.arg("~");
        }
        xtrim.arg(min_id);
        self.query(&xtrim).await
    }

    /// XINFO GROUPS key
    pub async fn xinfo_groups<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("XINFO").arg("GROUPS").arg(key)).await
    }

    /// XINFO STREAM key
    pub async fn xinfo_stream<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("XINFO").arg("STREAM").arg(key)).await
    }

    /// XINFO STREAM key FULL COUNT count
    pub async fn xinfo_stream_full<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: usize) -> Result<RV> {
        self.query(
            cmd("XINFO")
                .arg("STREAM")
                .arg(key)
                .arg("FULL")
                .arg("COUNT")
                .arg(count),
        )
        .await
    }

    /// XINFO CONSUMERS key group
    pub async fn xinfo_consumers<K: ToRedisArgs, G: ToRedisArgs, RV: FromRedisValue>(&self, key: K, group: G) -> Result<RV> {
        self.query(cmd("XINFO").arg("CONSUMERS").arg(key).arg(group)).await
    }
}
