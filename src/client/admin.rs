//! Connection and server administration commands

use super::{millis, Client};
use crate::error::Result;
use redis::{cmd, FromRedisValue, ToRedisArgs};
use std::time::Duration;

impl Client {
    /// COMMAND
    pub async fn command<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("COMMAND")).await
    }

    /// CLIENT GETNAME
    pub async fn client_getname<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLIENT").arg("GETNAME")).await
    }

    /// ECHO message
    pub async fn echo<M: ToRedisArgs, RV: FromRedisValue>(&self, message: M) -> Result<RV> {
        self.query(cmd("ECHO").arg(message)).await
    }

    /// PING
    pub async fn ping<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("PING")).await
    }

    /// QUIT
    ///
    /// Closes the pooled connection it runs on; the pool replaces it.
    pub async fn quit<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("QUIT")).await
    }

    /// BGREWRITEAOF
    pub async fn bgrewriteaof<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("BGREWRITEAOF")).await
    }

    /// BGSAVE
    pub async fn bgsave<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("BGSAVE")).await
    }

    /// CLIENT KILL ip:port
    pub async fn client_kill<RV: FromRedisValue>(&self, ip_port: &str) -> Result<RV> {
        self.query(cmd("CLIENT").arg("KILL").arg(ip_port)).await
    }

    /// CLIENT KILL filter value [filter value ...]
    pub async fn client_kill_by_filter<F: ToRedisArgs, RV: FromRedisValue>(&self, filters: F) -> Result<RV> {
        self.query(cmd("CLIENT").arg("KILL").arg(filters)).await
    }

    /// CLIENT LIST
    pub async fn client_list<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLIENT").arg("LIST")).await
    }

    /// CLIENT PAUSE milliseconds
    pub async fn client_pause<RV: FromRedisValue>(&self, pause: Duration) -> Result<RV> {
        self.query(cmd("CLIENT").arg("PAUSE").arg(millis(pause))).await
    }

    /// CLIENT ID
    pub async fn client_id<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CLIENT").arg("ID")).await
    }

    /// CONFIG GET parameter
    pub async fn config_get<P: ToRedisArgs, RV: FromRedisValue>(&self, parameter: P) -> Result<RV> {
        self.query(cmd("CONFIG").arg("GET").arg(parameter)).await
    }

    /// CONFIG RESETSTAT
    pub async fn config_reset_stat<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CONFIG").arg("RESETSTAT")).await
    }

    /// CONFIG SET parameter value
    pub async fn config_set<P: ToRedisArgs, V: ToRedisArgs, RV: FromRedisValue>(&self, parameter: P, value: V) -> Result<RV> {
        self.query(cmd("CONFIG").arg("SET").arg(parameter).arg(value)).await
    }

    /// CONFIG REWRITE
    pub async fn config_rewrite<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("CONFIG").arg("REWRITE")).await
    }

    /// DBSIZE
    pub async fn dbsize<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("DBSIZE")).await
    }

    /// FLUSHALL
    pub async fn flushall<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("FLUSHALL")).await
    }

    /// FLUSHALL ASYNC
    pub async fn flushall_async<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("FLUSHALL").arg("ASYNC")).await
    }

    /// FLUSHDB
    pub async fn flushdb<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("FLUSHDB")).await
    }

    /// FLUSHDB ASYNC
    pub async fn flushdb_async<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("FLUSHDB").arg("ASYNC")).await
    }

    /// INFO [section ...]
    pub async fn info<RV: FromRedisValue>(&self, sections: &[&str]) -> Result<RV> {
        self.query(cmd("INFO").arg(sections)).await
    }

    /// LASTSAVE
    pub async fn lastsave<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("LASTSAVE")).await
    }

    /// SAVE
    pub async fn save<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("SAVE")).await
    }

    /// SHUTDOWN
    pub async fn shutdown<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("SHUTDOWN")).await
    }

    /// SHUTDOWN SAVE
    pub async fn shutdown_save<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("SHUTDOWN").arg("SAVE")).await
    }

    /// SHUTDOWN NOSAVE
    pub async fn shutdown_nosave<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("SHUTDOWN").arg("NOSAVE")).await
    }

    /// REPLICAOF host port (`REPLICAOF NO ONE` to promote)
    pub async fn replicaof<RV: FromRedisValue>(&self, host: &str, port: &str) -> Result<RV> {
        self.query(cmd("REPLICAOF").arg(host).arg(port)).await
    }

    /// TIME
    pub async fn time<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("TIME")).await
    }

    /// DEBUG OBJECT key
    pub async fn debug_object<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K) -> Result<RV> {
        self.query(cmd("DEBUG").arg("OBJECT").arg(key)).await
    }

    /// READONLY
    pub async fn readonly<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("READONLY")).await
    }

    /// READWRITE
    pub async fn readwrite<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(&cmd("READWRITE")).await
    }

    /// MEMORY USAGE key [SAMPLES count]
    pub async fn memory_usage<K: ToRedisArgs, RV: FromRedisValue>(&self, key: K, samples: Option<usize>) -> Result<RV> {
        let mut usage = cmd("MEMORY");
        usage.arg("USAGE").arg(key);
        if let Some(samples) = samples {
            usage.arg("SAMPLES").arg(samples);
        }
        self.query(&usage).await
    }
}
