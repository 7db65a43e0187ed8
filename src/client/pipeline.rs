//! Pipelines and MULTI/EXEC transactions

use super::{Client, Request};
use crate::error::Result;
use redis::{FromRedisValue, Pipeline};

impl Client {
    /// Build a pipeline with `build` and send it in one round trip
    ///
    /// The reply is one value per queued command (ignored commands excluded).
    /// An error from `build` is returned as is and nothing is sent.
    pub async fn pipelined<RV, F>(&self, build: F) -> Result<RV>
    where
        RV: FromRedisValue,
        F: FnOnce(&mut Pipeline) -> Result<()>,
    {
        let mut pipe = redis::pipe();
        build(&mut pipe)?;
        self.query_pipeline(&pipe).await
    }

    /// Same as `pipelined`, wrapped in MULTI/EXEC
    pub async fn tx_pipelined<RV, F>(&self, build: F) -> Result<RV>
    where
        RV: FromRedisValue,
        F: FnOnce(&mut Pipeline) -> Result<()>,
    {
        let mut pipe = redis::pipe();
        pipe.atomic();
        build(&mut pipe)?;
        self.query_pipeline(&pipe).await
    }

    /// Send a prebuilt pipeline
    pub async fn query_pipeline<RV: FromRedisValue>(&self, pipe: &Pipeline) -> Result<RV> {
        self.dispatch(Request::Pipeline(pipe)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::offline_client;
    use crate::error::{Error, Result};
    use redis::{ErrorKind, RedisError};

    #[tokio::test]
    async fn test_builder_error_skips_round_trip() {
        let client = offline_client();

        // Nothing listens, so reaching the pool would give Error::Pool
        let aborted: Result<(i64,)> = client
            .pipelined(|pipe| {
                pipe.cmd("INCR").arg("counter");
                Err(RedisError::from((ErrorKind::ClientError, "batch rejected")).into())
            })
            .await;

        match aborted {
            Err(Error::Redis(e)) => assert_eq!(e.kind(), ErrorKind::ClientError),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tx_builder_error_skips_round_trip() {
        let client = offline_client();

        let aborted: Result<()> = client
            .tx_pipelined(|_| Err(Error::Config("empty transaction".into())))
            .await;
        assert!(matches!(aborted, Err(Error::Config(_))));
    }
}
