//! Tests against a running Redis server
//!
//! Skipped unless FERRUM_CTX_TEST_ADDR is set, e.g.
//! `FERRUM_CTX_TEST_ADDR=127.0.0.1:6379 cargo test`.
//! Every test works on its own key prefix.

use ferrum_ctx::redis::Script;
use ferrum_ctx::{Client, Config, Context, ContextError, Error};
use std::collections::HashMap;
use std::time::Duration;

async fn live_client() -> Option<Client> {
    live_client_sized(0).await
}

/// Live client with at most `pool_size` connections (0 for the default)
async fn live_client_sized(pool_size: usize) -> Option<Client> {
    let addr = std::env::var("FERRUM_CTX_TEST_ADDR").ok()?;
    let config = Config {
        pool_size,
        ..Config::new(addr)
    };
    let client = Client::connect(&config)
        .await
        .expect("FERRUM_CTX_TEST_ADDR is set but the server is unreachable");
    Some(client)
}

#[tokio::test]
async fn test_default_path_round_trip() {
    let Some(client) = live_client().await else { return };

    let () = client.set("ferrum-ctx:test:rt", "value").await.unwrap();
    let value: Option<String> = client.get("ferrum-ctx:test:rt").await.unwrap();
    assert_eq!(value.as_deref(), Some("value"));

    let removed: i64 = client.del("ferrum-ctx:test:rt").await.unwrap();
    assert_eq!(removed, 1);

    let missing: Option<String> = client.get("ferrum-ctx:test:rt").await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_bound_context_matches_default_path() {
    let Some(client) = live_client().await else { return };
    let bound = client.with_context(Context::background().with_timeout(Duration::from_secs(5)));

    let () = client.del("ferrum-ctx:test:eq").await.unwrap();
    let first: i64 = client.incr("ferrum-ctx:test:eq").await.unwrap();
    let second: i64 = bound.incr("ferrum-ctx:test:eq").await.unwrap();
    assert_eq!((first, second), (1, 2));

    let () = client.del("ferrum-ctx:test:eq").await.unwrap();
}

#[tokio::test]
async fn test_canceled_context_leaves_store_untouched() {
    let Some(client) = live_client().await else { return };
    let (ctx, token) = Context::background().with_cancel();
    token.cancel();

    let () = client.del("ferrum-ctx:test:cancel").await.unwrap();
    let err = client
        .with_context(ctx)
        .set::<_, _, ()>("ferrum-ctx:test:cancel", "never")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Context(ContextError::Canceled)));

    let exists: bool = client.exists("ferrum-ctx:test:cancel").await.unwrap();
    assert!(!exists);
}

#[tokio::test]
async fn test_deadline_interrupts_blocking_pop() {
    // One connection, so the follow-up call cannot dodge the interrupted one
    let Some(client) = live_client_sized(1).await else { return };
    let () = client.del("ferrum-ctx:test:blpop").await.unwrap();

    let bounded = client.with_context(Context::background().with_timeout(Duration::from_millis(100)));
    let err = bounded
        .blpop::<_, Option<(String, String)>>("ferrum-ctx:test:blpop", Duration::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Context(ContextError::DeadlineExceeded)));

    let pong: String = tokio::time::timeout(Duration::from_secs(3), client.ping())
        .await
        .expect("PING waited on the interrupted BLPOP")
        .unwrap();
    assert_eq!(pong, "PONG");
}

#[tokio::test]
async fn test_pipelines() {
    let Some(client) = live_client().await else { return };

    let (set, value): (String, i64) = client
        .pipelined(|pipe| {
            pipe.cmd("SET").arg("ferrum-ctx:test:pipe").arg(41);
            pipe.cmd("INCR").arg("ferrum-ctx:test:pipe");
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(set, "OK");
    assert_eq!(value, 42);

    let (count,): (i64,) = client
        .tx_pipelined(|pipe| {
            pipe.cmd("DEL").arg("ferrum-ctx:test:pipe").ignore();
            pipe.cmd("EXISTS").arg("ferrum-ctx:test:pipe");
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_hash_and_list_families() {
    let Some(client) = live_client().await else { return };
    let () = client.del(&["ferrum-ctx:test:h", "ferrum-ctx:test:l"]).await.unwrap();

    let () = client.hset("ferrum-ctx:test:h", "a", 1).await.unwrap();
    let () = client.hset("ferrum-ctx:test:h", "b", 2).await.unwrap();
    let all: HashMap<String, i64> = client.hgetall("ferrum-ctx:test:h").await.unwrap();
    assert_eq!(all.get("a"), Some(&1));
    assert_eq!(all.get("b"), Some(&2));

    let len: i64 = client.rpush("ferrum-ctx:test:l", &["x", "y", "z"]).await.unwrap();
    assert_eq!(len, 3);
    let items: Vec<String> = client.lrange("ferrum-ctx:test:l", 0, -1).await.unwrap();
    assert_eq!(items, vec!["x", "y", "z"]);

    let () = client.del(&["ferrum-ctx:test:h", "ferrum-ctx:test:l"]).await.unwrap();
}

#[tokio::test]
async fn test_scripts() {
    let Some(client) = live_client().await else { return };

    let echoed: String = client
        .eval("return ARGV[1]", &["ferrum-ctx:test:script"], "hi")
        .await
        .unwrap();
    assert_eq!(echoed, "hi");

    let script = Script::new("return tonumber(ARGV[1]) * 2");
    let sha = client.load_script(&script).await.unwrap();
    assert_eq!(sha, script.get_hash());

    let doubled: i64 = client.invoke_script(&script.arg(21)).await.unwrap();
    assert_eq!(doubled, 42);
}
