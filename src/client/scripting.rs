//! Lua scripting commands

use super::{Client, Request};
use crate::error::Result;
use redis::{cmd, FromRedisValue, Script, ScriptInvocation, ToRedisArgs};

impl Client {
    /// EVAL script numkeys key [key ...] arg [arg ...]
    pub async fn eval<K: ToRedisArgs, A: ToRedisArgs, RV: FromRedisValue>(
        &self,
        script: &str,
        keys: &[K],
        args: A,
    ) -> Result<RV> {
        self.query(cmd("EVAL").arg(script).arg(keys.len()).arg(keys).arg(args))
            .await
    }

    /// EVALSHA sha1 numkeys key [key ...] arg [arg ...]
    pub async fn evalsha<K: ToRedisArgs, A: ToRedisArgs, RV: FromRedisValue>(
        &self,
        sha1: &str,
        keys: &[K],
        args: A,
    ) -> Result<RV> {
        self.query(cmd("EVALSHA").arg(sha1).arg(keys.len()).arg(keys).arg(args))
            .await
    }

    /// Run a prepared `redis::Script` invocation
    ///
    /// Tries EVALSHA first and loads the script on NOSCRIPT, as the
    /// underlying client does.
    pub async fn invoke_script<RV: FromRedisValue>(&self, invocation: &ScriptInvocation<'_>) -> Result<RV> {
        self.dispatch(Request::Invoke(invocation)).await
    }

    /// Load a `redis::Script` into the script cache, returning its SHA1
    pub async fn load_script(&self, script: &Script) -> Result<String> {
        self.dispatch(Request::Load(script)).await
    }

    /// SCRIPT EXISTS sha1 [sha1 ...]
    pub async fn script_exists<H: ToRedisArgs, RV: FromRedisValue>(&self, hashes: H) -> Result<RV> {
        self.query(cmd("SCRIPT").arg("EXISTS").arg(hashes)).await
    }

    /// SCRIPT FLUSH
    pub async fn script_flush<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("SCRIPT").arg("FLUSH")).await
    }

    /// SCRIPT KILL
    pub async fn script_kill<RV: FromRedisValue>(&self) -> Result<RV> {
        self.query(cmd("SCRIPT").arg("KILL")).await
    }

    /// SCRIPT LOAD script
    pub async fn script_load<RV: FromRedisValue>(&self, script: &str) -> Result<RV> {
        self.query(cmd("SCRIPT").arg("LOAD").arg(script)).await
    }
}
