//! Generic key commands (DEL, EXPIRE, RENAME, SCAN, ...)

use super::{millis, scan_options, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};
use std::time::Duration;

impl Client {
    /// DEL key [key ...]
    pub async fn del<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("DEL").arg(keys)).await
    }

    /// UNLINK key [key ...]
    pub async fn unlink<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("UNLINK").arg(keys)).await
    }

    /// DUMP key
    pub async fn dump<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("DUMP").arg(key)).await
    }

    /// EXISTS key [key ...]
    pub async fn exists<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("EXISTS").arg(keys)).await
    }

    /// EXPIRE key seconds
    pub async fn expire<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, seconds: i64) -> Result<RV> {
        self.query(cmd("EXPIRE").arg(key).arg(seconds)).await
    }

    /// EXPIREAT key unix-time-seconds
    pub async fn expire_at<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, timestamp: i64) -> Result<RV> {
        self.query(cmd("EXPIREAT").arg(key).arg(timestamp)).await
    }

    /// KEYS pattern
    pub async fn keys<K: ToRedisArgs, RV: FromRedisValue>(&self, pattern: K) -> Result<RV> {
        self.query(cmd("KEYS").arg(pattern)).await
    }

    /// MIGRATE host port key db timeout-ms
    pub async fn migrate<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        host: &str,
        port: u16,
        key: K,
        db: i64,
        timeout: Duration,
    ) -> Result<RV> {
        self.query(
            cmd("MIGRATE")
                .arg(host)
                .arg(port)
                .arg(key)
                .arg(db)
                .arg(millis(timeout)),
        )
        .await
    }

    /// MOVE key db
    ///
    /// Named `move_key` because `move` is a keyword.
    pub async fn move_key<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, db: i64) -> Result<RV> {
        self.query(cmd("MOVE").arg(key).arg(db)).await
    }

    /// OBJECT REFCOUNT key
    pub async fn object_refcount<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("OBJECT").arg("REFCOUNT").arg(key)).await
    }

    /// OBJECT ENCODING key
    pub async fn object_encoding<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("OBJECT").arg("ENCODING").arg(key)).await
    }

    /// OBJECT IDLETIME key
    pub async fn object_idletime<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("OBJECT").arg("IDLETIME").arg(key)).await
    }

    /// PERSIST key
    pub async fn persist<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("PERSIST").arg(key)).await
    }

    /// PEXPIRE key milliseconds
    pub async fn pexpire<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, ms: i64) -> Result<RV> {
        self.query(cmd("PEXPIRE").arg(key).arg(ms)).await
    }

    /// PEXPIREAT key unix-time-milliseconds
    pub async fn pexpire_at<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, timestamp_ms: i64) -> Result<RV> {
        self.query(cmd("PEXPIREAT").arg(key).arg(timestamp_ms)).await
    }

    /// PTTL key
    pub async fn pttl<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("PTTL").arg(key)).await
    }

    /// RANDOMKEY
    pub async fn random_key<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("RANDOMKEY")).await
    }

    /// RENAME key newkey
    pub async fn rename<K: ToRedisArgs, N: ToRedisArgs, RV: FromRedisValue>(&self, key: K, new_key: N) -> Result<RV> {
        self.query(cmd("RENAME").arg(key).arg(new_key)).await
    }

    /// RENAMENX key newkey
    pub async fn rename_nx<K: ToRedisArgs, N: ToRedisArgs, RV: FromRedisValue>(&self, key: K, new_key: N) -> Result<RV> {
        self.query(cmd("RENAMENX").arg(key).arg(new_key)).await
    }

    /// RESTORE key ttl serialized-value
    ///
    /// A zero `ttl` restores without expiration.
    pub async fn restore<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        ttl: Duration,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("RESTORE").arg(key).arg(millis(ttl)).arg(value)).await
    }

    /// RESTORE key ttl serialized-value REPLACE
    pub async fn restore_replace<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        ttl: Duration,
        value: V,
    ) -> Result<RV> {
        self.query(
            cmd("RESTORE")
                .arg(key)
                .arg(millis(ttl))
                .arg(value)
                .arg("REPLACE"),
        )
        .await
    }

    /// SORT key [BY ...] [LIMIT ...] [GET ...] [ASC|DESC] [ALPHA]
    ///
    /// `options` is appended verbatim, e.g. `&["LIMIT", "0", "10", "ALPHA"]`.
    pub async fn sort<K: ToRedisArgs, O: ToRedisArgs, RV: FromRedisValue>(&self, key: K, options: O) -> Result<RV> {
        self.query(cmd("SORT").arg(key).arg(options)).await
    }

    /// SORT key [options ...] STORE destination
    pub async fn sort_store<K: ToRedisArgs, O: ToRedisArgs, D: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        options: O,
        destination: D,
    ) -> Result<RV> {
        self.query(
            cmd("SORT")
                .arg(key)
                .arg(options)
                .arg("STORE")
                .arg(destination),
        )
        .await
    }

    /// TOUCH key [key ...]
    pub async fn touch<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("TOUCH").arg(keys)).await
    }

    /// TTL key
    pub async fn ttl<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("TTL").arg(key)).await
    }

    /// TYPE key
    pub async fn key_type<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("TYPE").arg(key)).await
    }

    /// SCAN cursor [MATCH pattern] [COUNT count]
    ///
    /// Replies with `(next_cursor, keys)`.
    pub async fn scan<RV: FromRedisValue>(&self, cursor: u64, pattern: &str, count: usize) -> Result<RV> {
        let mut scan = cmd("SCAN");
        scan.arg(cursor);
        scan_options(&mut scan, pattern, count);
        self.query(&scan).await
    }

    /// SCAN cursor [MATCH pattern] [COUNT count] TYPE type
    pub async fn scan_type<RV: FromRedisValue>(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
        key_type: &str,
    ) -> Result<RV> {
        let mut scan = cmd("SCAN");
        scan.arg(cursor);
        scan_options(&mut scan, pattern, count);
        scan.arg("TYPE").arg(key_type);
        self.query(&scan).await
    }
}
