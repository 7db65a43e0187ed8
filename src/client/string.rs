//! String and bitmap commands

use super::{millis, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, SetOptions, ToRedisArgs};
use std::time::Duration;

impl Client {
    /// APPEND key value
    pub async fn append<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, value: V) -> Result<RV> {
        self.query(cmd("APPEND").arg(key).arg(value)).await
    }

    /// DECR key
    pub async fn decr<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("DECR").arg(key)).await
    }

    /// DECRBY key decrement
    pub async fn decr_by<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, decrement: i64) -> Result<RV> {
        self.query(cmd("DECRBY").arg(key).arg(decrement)).await
    }

    /// GET key
    pub async fn get<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("GET").arg(key)).await
    }

    /// GETRANGE key start end
    pub async fn get_range<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, start: isize, end: isize) -> Result<RV> {
        self.query(cmd("GETRANGE").arg(key).arg(start).arg(end)).await
    }

    /// GETSET key value
    pub async fn get_set<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, value: V) -> Result<RV> {
        self.query(cmd("GETSET").arg(key).arg(value)).await
    }

    /// GETEX key PX milliseconds, or GETEX key PERSIST when `expiration` is `None`
    pub async fn get_ex<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, expiration: Option<Duration>) -> Result<RV> {
        let mut getex = cmd("GETEX");
        getex.arg(key);
        match expiration {
            Some(ttl) => getex.arg("PX").arg(millis(ttl)),
            None => getex.arg("PERSIST"),
        };
        self.query(&getex).await
    }

    /// GETDEL key
    pub async fn get_del<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("GETDEL").arg(key)).await
    }

    /// INCR key
    pub async fn incr<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("INCR").arg(key)).await
    }

    /// INCRBY key increment
    pub async fn incr_by<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, increment: i64) -> Result<RV> {
        self.query(cmd("INCRBY").arg(key).arg(increment)).await
    }

    /// INCRBYFLOAT key increment
    pub async fn incr_by_float<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, increment: f64) -> Result<RV> {
        self.query(cmd("INCRBYFLOAT").arg(key).arg(increment)).await
    }

    /// MGET key [key ...]
    pub async fn mget<K: ToRedisArgs, RV: FromRedisValue>(&self, keys: K) -> Result<RV> {
        self.query(cmd("MGET").arg(keys)).await
    }

    /// MSET key value [key value ...]
    pub async fn mset<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, items: &[(K, V)]) -> Result<RV> {
        self.query(cmd("MSET").arg(items)).await
    }

    /// MSETNX key value [key value ...]
    pub async fn mset_nx<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, items: &[(K, V)]) -> Result<RV> {
        self.query(cmd("MSETNX").arg(items)).await
    }

    /// SET key value
    pub async fn set<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, key: K, value: V) -> Result<RV> {
        self.query(cmd("SET").arg(key).arg(value)).await
    }

    /// SET key value with NX/XX, expiration and GET options
    pub async fn set_options<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        value: V,
        options: SetOptions,
    ) -> Result<RV> {
        self.query(cmd("SET").arg(key).arg(value).arg(options)).await
    }

    /// SET key value PX milliseconds
    pub async fn set_ex<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        value: V,
        expiration: Duration,
    ) -> Result<RV> {
        self.query(cmd("SET").arg(key).arg(value).arg("PX").arg(millis(expiration)))
            .await
    }

    /// SET key value [PX milliseconds] NX
    ///
    /// Reads as `true` into a `bool` when the key was set.
    pub async fn set_nx<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        value: V,
        expiration: Option<Duration>,
    ) -> Result<RV> {
        self.query(&conditional_set(key, value, expiration, "NX")).await
    }

    /// SET key value [PX milliseconds] XX
    pub async fn set_xx<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        value: V,
        expiration: Option<Duration>,
    ) -> Result<RV> {
        self.query(&conditional_set(key, value, expiration, "XX")).await
    }

    /// SETRANGE key offset value
    pub async fn set_range<K: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        offset: usize,
        value: V,
    ) -> Result<RV> {
        self.query(cmd("SETRANGE").arg(key).arg(offset).arg(value)).await
    }

    /// STRLEN key
    pub async fn strlen<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("STRLEN").arg(key)).await
    }

    /// GETBIT key offset
    pub async fn get_bit<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, offset: usize) -> Result<RV> {
        self.query(cmd("GETBIT").arg(key).arg(offset)).await
    }

    /// SETBIT key offset value
    pub async fn set_bit<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, offset: usize, value: bool) -> Result<RV> {
        self.query(cmd("SETBIT").arg(key).arg(offset).arg(value)).await
    }

    /// BITCOUNT key
    pub async fn bit_count<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("BITCOUNT").arg(key)).await
    }

    /// BITCOUNT key start end
    pub async fn bit_count_range<K: ToRedisArgs, RV: FromRedisValue>(
        &self,
        key: K,
        start: isize,
        end: isize,
    ) -> Result<RV> {
        self.query(cmd("BITCOUNT").arg(key).arg(start).arg(end)).await
    }

    /// BITOP AND destkey key [key ...]
    pub async fn bit_op_and<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, dest: D, keys: K) -> Result<RV> {
        self.query(cmd("BITOP").arg("AND").arg(dest).arg(keys)).await
    }

    /// BITOP OR destkey key [key ...]
    pub async fn bit_op_or<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, dest: D, keys: K) -> Result<RV> {
        self.query(cmd("BITOP").arg("OR").arg(dest).arg(keys)).await
    }

    /// BITOP XOR destkey key [key ...]
    pub async fn bit_op_xor<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, dest: D, keys: K) -> Result<RV> {
        self.query(cmd("BITOP").arg("XOR").arg(dest).arg(keys)).await
    }

    /// BITOP NOT destkey key
    pub async fn bit_op_not<D: ToRedisArgs, K: ToRedisArgs, RV: FromRedisValue>(&self, dest: D, key: K) -> Result<RV> {
        self.query(cmd("BITOP").arg("NOT").arg(dest).arg(key)).await
    }

    /// BITPOS key bit [start [end]]
    pub async fn bit_pos<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, bit: bool, positions: &[i64]) -> Result<RV> {
        self.query(cmd("BITPOS").arg(key).arg(bit).arg(positions)).await
    }

    /// BITFIELD key [GET ...] [SET ...] [INCRBY ...] [OVERFLOW ...]
    pub async fn bit_field<K: ToRedisArgs, O: ToRedisArgs, RV: FromRedisValue>(&self, key: K, operations: O) -> Result<RV> {
        self.query(cmd("BITFIELD").arg(key).arg(operations)).await
    }
}

/// Build SET with an existence condition and optional expiration
fn conditional_set<K: ToRedisArgs, V: ToRedisArgs>(
    key: K,
    value: V,
    expiration: Option<Duration>,
    condition: &str,
) -> redis::Cmd {
    let mut set = cmd("SET");
    set.arg(key).arg(value);
    if let Some(ttl) = expiration {
        set.arg("PX").arg(millis(ttl));
    }
    set.arg(condition);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::command_words as words;

    #[test]
    fn test_conditional_set_without_expiration() {
        let set = conditional_set("lock", "owner", None, "NX");
        assert_eq!(words(&set), ["SET", "lock", "owner", "NX"]);
    }

    #[test]
    fn test_conditional_set_with_expiration() {
        let set = conditional_set("lock", "owner", Some(Duration::from_secs(2)), "XX");
        assert_eq!(words(&set), ["SET", "lock", "owner", "PX", "2000", "XX"]);
    }
}
