//! Context-aware client module
//!
//! `Client` wraps a pooled Redis client and decides, per call, which
//! `Context` governs the call:
//! - a facade built by `connect` uses a fresh background context each time
//! - a facade built by `with_context` always uses its bound context
//!
//! Every command goes through the governing context: pooled requests via
//! `dispatch`, dedicated pub/sub connections via `governed`.
//! Commands are grouped by family in separate files, each adding an
//! `impl Client` block.

mod admin;
mod cluster;
mod geo;
mod hash;
mod hyperloglog;
mod key;
mod list;
mod pipeline;
mod pubsub;
mod scripting;
mod set;
mod sorted_set;
mod stream;
mod string;

use crate::config::Config;
use crate::context::{Context, ContextError};
use crate::error::{Error, Result};
use deadpool_redis::{Connection, Pool, PoolConfig, Runtime};
use redis::{Cmd, FromRedisValue, Pipeline, RedisResult, Script, ScriptInvocation, Value};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

/// Handle to the underlying store client
///
/// Cloning shares the same pool.
#[derive(Clone)]
struct Backend {
    /// Pooled connections for request/response commands
    pool: Pool,

    /// Plain client, used for dedicated pub/sub connections
    client: redis::Client,
}

impl Backend {
    /// Build the pool and client without touching the network
    fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let url = config.redis_url()?;
        let client = redis::Client::open(url.as_str())
            .map_err(|e| Error::Config(format!("invalid redis URL: {}", e)))?;

        let mut pool_config = deadpool_redis::Config::from_url(url.as_str());
        pool_config.pool = Some(PoolConfig::new(config.effective_pool_size()));

        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| Error::Config(format!("cannot create pool: {}", e)))?;

        debug!(
            "Pool created for {} (db {}, max {} connections)",
            config.addr,
            config.db,
            config.effective_pool_size()
        );

        Ok(Backend { pool, client })
    }
}

/// Redis client with per-call context selection
#[derive(Clone)]
pub struct Client {
    /// Shared handle to the underlying store client
    backend: Backend,

    /// Context bound by `with_context`
    ctx: Option<Context>,

    /// Whether `ctx` governs calls
    use_ctx: bool,
}

impl Client {
    /// Connect to the store described by `config`
    ///
    /// Issues a PING bounded by the dial timeout and only returns the
    /// client once it succeeds.
    pub async fn connect(config: &Config) -> Result<Self> {
        info!("Connecting to redis at {} (db {})", config.addr, config.db);

        let client = Client::from_backend(Backend::open(config)?);

        let probe = Context::background().with_timeout(config.dial_timeout());
        let outcome = probe
            .run(async {
                let mut conn = client.backend.pool.get().await?;
                let _: String = redis::cmd("PING").query_async(&mut conn).await?;
                Ok::<_, Error>(())
            })
            .await
            .map_err(Error::from)
            .and_then(|checked| checked);

        match outcome {
            Ok(()) => {
                info!("Connected to redis at {}", config.addr);
                Ok(client)
            }
            Err(e) => {
                error!("Health check against {} failed: {}", config.addr, e);
                Err(Error::Connection {
                    addr: config.addr.clone(),
                    source: Box::new(e),
                })
            }
        }
    }

    /// Wrap a backend with the default (background) context path
    fn from_backend(backend: Backend) -> Self {
        Client {
            backend,
            ctx: None,
            use_ctx: false,
        }
    }

    /// Derive a client whose calls are all governed by `ctx`
    ///
    /// The receiver is left untouched and keeps using background contexts.
    /// The flag is set even when `ctx` is itself a background context.
    pub fn with_context(&self, ctx: Context) -> Client {
        Client {
            backend: self.backend.clone(),
            ctx: Some(ctx),
            use_ctx: true,
        }
    }

    /// Bound context, if this client was derived with `with_context`
    pub fn context(&self) -> Option<&Context> {
        self.ctx.as_ref()
    }

    /// Whether calls use the bound context
    pub fn uses_bound_context(&self) -> bool {
        self.use_ctx
    }

    /// Underlying connection pool
    ///
    /// Closing the pool is the caller's responsibility.
    pub fn pool(&self) -> &Pool {
        &self.backend.pool
    }

    /// Context governing the next call
    fn governing_context(&self) -> Context {
        match (&self.ctx, self.use_ctx) {
            (Some(ctx), true) => ctx.clone(),
            _ => Context::background(),
        }
    }

    /// Run `op` under the governing context
    ///
    /// `op` must own whatever it opens: it is dropped when the context wins.
    async fn governed<T, F>(&self, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.governing_context().run(op).await?
    }

    /// Send `request` on a pooled connection under the governing context
    ///
    /// A connection whose reply was abandoned still owes it to the server,
    /// so it is detached from the pool instead of being handed back.
    async fn dispatch<T: FromRedisValue>(&self, request: Request<'_>) -> Result<T> {
        let ctx = self.governing_context();
        let mut conn = ctx.run(self.connection()).await??;

        let outcome = ctx.run(request.send(&mut conn)).await;
        match outcome {
            Ok(reply) => Ok(reply?),
            Err(verdict) => {
                discard(conn, verdict);
                Err(verdict.into())
            }
        }
    }

    /// Take a pooled connection
    async fn connection(&self) -> Result<Connection> {
        Ok(self.backend.pool.get().await?)
    }

    /// Send an arbitrary command
    ///
    /// Every typed command method ends up here.
    pub async fn query<T: FromRedisValue>(&self, cmd: &Cmd) -> Result<T> {
        self.dispatch(Request::Command(cmd)).await
    }
}

/// What can be sent on a pooled connection
enum Request<'a> {
    Command(&'a Cmd),
    Pipeline(&'a Pipeline),
    Invoke(&'a ScriptInvocation<'a>),
    Load(&'a Script),
}

impl Request<'_> {
    async fn send<T: FromRedisValue>(self, conn: &mut Connection) -> RedisResult<T> {
        match self {
            Request::Command(cmd) => cmd.query_async(conn).await,
            Request::Pipeline(pipe) => pipe.query_async(conn).await,
            Request::Invoke(invocation) => invocation.invoke_async(conn).await,
            Request::Load(script) => {
                let sha = script.prepare_invoke().load_async(conn).await?;
                T::from_redis_value(&Value::BulkString(sha.into_bytes()))
            }
        }
    }
}

/// Close a connection interrupted mid-request
fn discard(conn: Connection, verdict: ContextError) {
    drop(Connection::take(conn));
    debug!("Dropped pooled connection after {}", verdict);
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("pool", &self.backend.pool.status())
            .field("ctx", &self.ctx)
            .field("use_ctx", &self.use_ctx)
            .finish()
    }
}

/// Milliseconds in a duration, as sent with PX-style arguments
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Append `MATCH` and `COUNT` to a SCAN-family command
///
/// An empty pattern and a zero count are left out.
pub(crate) fn scan_options(cmd: &mut Cmd, pattern: &str, count: usize) {
    if !pattern.is_empty() {
        cmd.arg("MATCH").arg(pattern);
    }
    if count > 0 {
        cmd.arg("COUNT").arg(count);
    }
}

/// Render a command as its words, for assertions
#[cfg(test)]
pub(crate) fn command_words(cmd: &Cmd) -> Vec<String> {
    cmd.args_iter()
        .map(|arg| match arg {
            redis::Arg::Simple(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            redis::Arg::Cursor => "<cursor>".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    /// Address where nothing listens
    const UNREACHABLE: &str = "127.0.0.1:1";

    pub(crate) fn offline_client() -> Client {
        let config = Config {
            pool_size: 2,
            ..Config::new(UNREACHABLE)
        };
        Client::from_backend(Backend::open(&config).unwrap())
    }

    #[tokio::test]
    async fn test_connect_unreachable_fails() {
        let config = Config {
            dial_timeout_ms: 2_000,
            ..Config::new(UNREACHABLE)
        };
        let result = Client::connect(&config).await;
        assert!(matches!(result, Err(Error::Connection { .. })));
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_config() {
        let config = Config {
            db: -4,
            ..Config::default()
        };
        assert!(matches!(Client::connect(&config).await, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_default_client_uses_background() {
        let client = offline_client();
        assert!(!client.uses_bound_context());
        assert!(client.context().is_none());
        assert_eq!(client.governing_context().err(), None);
    }

    #[tokio::test]
    async fn test_with_context_leaves_receiver_unchanged() {
        let client = offline_client();
        let (ctx, cancel) = Context::background().with_cancel();
        cancel.cancel();

        for _ in 0..3 {
            let derived = client.with_context(ctx.clone());
            assert!(derived.uses_bound_context());
        }

        assert!(!client.uses_bound_context());
        assert!(client.context().is_none());
        assert_eq!(client.governing_context().err(), None);
    }

    #[tokio::test]
    async fn test_explicit_background_still_binds() {
        let client = offline_client().with_context(Context::background());
        assert!(client.uses_bound_context());
        assert!(client.context().is_some());
    }

    #[tokio::test]
    async fn test_canceled_context_fails_every_call() {
        let (ctx, cancel) = Context::background().with_cancel();
        cancel.cancel();
        let client = offline_client().with_context(ctx);

        let get: Result<Option<String>> = client.get("k").await;
        assert!(matches!(get, Err(Error::Context(ContextError::Canceled))));

        let set: Result<()> = client.set("k", "v").await;
        assert!(matches!(set, Err(Error::Context(ContextError::Canceled))));

        let piped: Result<(i64,)> = client
            .pipelined(|pipe| {
                pipe.cmd("INCR").arg("counter");
                Ok(())
            })
            .await;
        assert!(matches!(piped, Err(Error::Context(ContextError::Canceled))));
    }

    #[tokio::test]
    async fn test_expired_context_fails_with_deadline() {
        let ctx = Context::background().with_deadline(Instant::now());
        let client = offline_client().with_context(ctx);

        let len: Result<i64> = client.llen("queue").await;
        assert!(matches!(len, Err(Error::Context(ContextError::DeadlineExceeded))));
    }

    #[tokio::test]
    async fn test_default_path_reaches_the_pool() {
        let client = offline_client();

        // Nothing listens, so the pool reports the failure, not the context
        let result: Result<Option<String>> = client.get("k").await;
        assert!(matches!(result, Err(Error::Pool(_))));
    }

    /// Split one RESP array of bulk strings off the front of `buf`
    fn parse_request(buf: &[u8]) -> Option<(Vec<Vec<u8>>, usize)> {
        fn header(buf: &[u8], pos: usize, marker: u8) -> Option<(usize, usize)> {
            if *buf.get(pos)? != marker {
                return None;
            }
            let rest = &buf[pos + 1..];
            let end = rest.windows(2).position(|w| w == b"\r\n")?;
            let n = std::str::from_utf8(&rest[..end]).ok()?.parse().ok()?;
            Some((n, pos + 1 + end + 2))
        }

        let (count, mut pos) = header(buf, 0, b'*')?;
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            let (len, start) = header(buf, pos, b'$')?;
            if buf.len() < start + len + 2 {
                return None;
            }
            words.push(buf[start..start + len].to_vec());
            pos = start + len + 2;
        }
        Some((words, pos))
    }

    /// Answer requests in order on one connection; BLPOP never gets a reply
    async fn serve_in_order(mut socket: tokio::net::TcpStream) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let mut stalled = false;

        loop {
            while !stalled {
                let Some((words, used)) = parse_request(&buf) else { break };
                buf.drain(..used);

                let name = String::from_utf8_lossy(&words[0]).to_ascii_uppercase();
                let reply = match (name.as_str(), words.get(1)) {
                    ("BLPOP", _) => {
                        stalled = true;
                        break;
                    }
                    ("PING", Some(echo)) => {
                        let mut bulk = format!("${}\r\n", echo.len()).into_bytes();
                        bulk.extend_from_slice(echo);
                        bulk.extend_from_slice(b"\r\n");
                        bulk
                    }
                    ("PING", None) => b"+PONG\r\n".to_vec(),
                    ("GET", _) => b"$-1\r\n".to_vec(),
                    _ => b"+OK\r\n".to_vec(),
                };
                if socket.write_all(&reply).await.is_err() {
                    return;
                }
            }

            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
    }

    /// Start an in-order server on a free local port
    async fn spawn_in_order_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                tokio::spawn(serve_in_order(socket));
            }
        });
        addr
    }

    async fn single_connection_client() -> Client {
        let config = Config {
            pool_size: 1,
            ..Config::new(spawn_in_order_server().await)
        };
        Client::connect(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_expired_call_does_not_poison_pool() {
        let client = single_connection_client().await;
        let bounded = client.with_context(Context::background().with_timeout(Duration::from_millis(100)));

        let popped: Result<Option<(String, String)>> = bounded.blpop("q", Duration::ZERO).await;
        assert!(matches!(popped, Err(Error::Context(ContextError::DeadlineExceeded))));

        // The only pooled connection still owes the BLPOP reply
        let value: Option<String> = tokio::time::timeout(Duration::from_secs(3), client.get("k"))
            .await
            .expect("GET queued behind the abandoned BLPOP")
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_canceled_call_does_not_poison_pool() {
        let client = single_connection_client().await;
        let (ctx, cancel) = Context::background().with_cancel();
        let bounded = client.with_context(ctx);

        let pending = tokio::spawn(async move {
            bounded.blpop::<_, Option<(String, String)>>("q", Duration::ZERO).await
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();

        let popped = pending.await.unwrap();
        assert!(matches!(popped, Err(Error::Context(ContextError::Canceled))));

        let pong: String = tokio::time::timeout(Duration::from_secs(3), client.ping())
            .await
            .expect("PING queued behind the abandoned BLPOP")
            .unwrap();
        assert_eq!(pong, "PONG");
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_scan_options_skip_defaults() {
        let mut bare = redis::cmd("SCAN");
        bare.arg(0);
        scan_options(&mut bare, "", 0);
        assert_eq!(command_words(&bare), ["SCAN", "0"]);

        let mut full = redis::cmd("SCAN");
        full.arg(0);
        scan_options(&mut full, "user:*", 100);
        assert_eq!(command_words(&full), ["SCAN", "0", "MATCH", "user:*", "COUNT", "100"]);
    }
}
