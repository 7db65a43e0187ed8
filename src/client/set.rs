//! Set commands

use super::{scan_options, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};

impl Client {
    /// SADD key member [member ...]
    pub async fn sadd<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("SADD").arg(key).arg(members)).await
    }

    /// SCARD key
    pub async fn scard<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("SCARD").arg(key)).await
    }

    /// SDIFF key [key ...]
    pub async fn sdiff<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("SDIFF").arg(keys)).await
    }

    /// SDIFFSTORE destination key [key ...]
    pub async fn sdiffstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, destination: D, keys: K) -> Result<RV> {
        self.query(cmd("SDIFFSTORE").arg(destination).arg(keys)).await
    }

    /// SINTER key [key ...]
    pub async fn sinter<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("SINTER").arg(keys)).await
    }

    /// SINTERSTORE destination key [key ...]
    pub async fn sinterstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, destination: D, keys: K) -> Result<RV> {
        self.query(cmd("SINTERSTORE").arg(destination).arg(keys)).await
    }

    /// SISMEMBER key member
    pub async fn sismember<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, member: M) -> Result<RV> {
        self.query(cmd("SISMEMBER").arg(key).arg(member)).await
    }

    /// SMISMEMBER key member [member ...]
    pub async fn smismember<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("SMISMEMBER").arg(key).arg(members)).await
    }

    /// SMEMBERS key
    pub async fn smembers<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("SMEMBERS").arg(key)).await
    }

    /// SMOVE source destination member
    pub async fn smove<S: ToRedisArgs, D: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(
        &self,
        source: S,
        destination: D,
        member: M,
    ) -> Result<RV> {
        self.query(cmd("SMOVE").arg(source).arg(destination).arg(member)).await
    }

    /// SPOP key
    pub async fn spop<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("SPOP").arg(key)).await
    }

    /// SPOP key count
    pub async fn spop_n<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: usize) -> Result<RV> {
        self.query(cmd("SPOP").arg(key).arg(count)).await
    }

    /// SRANDMEMBER key
    pub async fn srandmember<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("SRANDMEMBER").arg(key)).await
    }

    /// SRANDMEMBER key count
    ///
    /// A negative count may return the same member several times.
    pub async fn srandmember_n<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, count: isize) -> Result<RV> {
        self.query(cmd("SRANDMEMBER").arg(key).arg(count)).await
    }

    /// SREM key member [member ...]
    pub async fn srem<K: ToRedisArgs, M: ToRedisArgs, RV: FromRedisValue>(&self, key: K, members: M) -> Result<RV> {
        self.query(cmd("SREM").arg(key).arg(members)).await
    }

    /// SUNION key [key ...]
    pub async fn sunion<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("SUNION").arg(keys)).await
    }

    /// SUNIONSTORE destination key [key ...]
    pub async fn sunionstore<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, destination: D, keys: K) -> Result<RV> {
        self.query(cmd("SUNIONSTORE").arg(destination).arg(keys)).await
    }

    /// SSCAN key cursor [MATCH pattern] [COUNT count]
    pub async fn sscan<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<RV> {
        let mut sscan = cmd("SSCAN");
        sscan.arg(key).arg(cursor);
        scan_options(&mut sscan, pattern, count);
        self.query(&sscan).await
    }
}
