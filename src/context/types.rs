//! Context value and its errors

use std::future::{pending, Future};
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Reasons a context stops a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The cancellation token fired
    #[error("context canceled")]
    Canceled,

    /// The deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation and deadline carrier for a single call (or a group of calls)
///
/// Contexts are cheap to clone: clones share the same cancellation token.
/// Deriving a child never changes the parent.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Cancellation signal, if any
    cancel: Option<CancellationToken>,

    /// Point in time after which calls fail, if any
    deadline: Option<Instant>,
}

impl Context {
    /// Create an empty context: never canceled, no deadline
    pub fn background() -> Self {
        Context {
            cancel: None,
            deadline: None,
        }
    }

    /// Derive a cancelable child
    ///
    /// Returns the child and the token that cancels it. Canceling the
    /// parent also cancels the child; the deadline is inherited.
    pub fn with_cancel(&self) -> (Context, CancellationToken) {
        let token = match &self.cancel {
            Some(parent) => parent.child_token(),
            None => CancellationToken::new(),
        };

        let child = Context {
            cancel: Some(token.clone()),
            deadline: self.deadline,
        };

        (child, token)
    }

    /// Derive a child that expires after `timeout`
    pub fn with_timeout(&self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child that expires at `deadline`
    ///
    /// A parent deadline that is earlier wins.
    pub fn with_deadline(&self, deadline: Instant) -> Context {
        let deadline = match self.deadline {
            Some(parent) if parent < deadline => parent,
            _ => deadline,
        };

        Context {
            cancel: self.cancel.clone(),
            deadline: Some(deadline),
        }
    }

    /// Deadline of this context, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the cancellation token has fired
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|token| token.is_cancelled())
            .unwrap_or(false)
    }

    /// Why this context is done, or `None` while it is still live
    ///
    /// Cancellation is reported before an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            return Some(ContextError::Canceled);
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Run a future under this context
    ///
    /// Fails without polling `fut` when the context is already done.
    /// Otherwise the future is dropped as soon as the token fires or the
    /// deadline passes.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ContextError> {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => pending::<()>().await,
            }
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(ContextError::Canceled),
            _ = expired => Err(ContextError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}

impl From<CancellationToken> for Context {
    fn from(token: CancellationToken) -> Self {
        Context {
            cancel: Some(token),
            deadline: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    #[test]
    fn test_background_is_never_done() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert_eq!(ctx.deadline(), None);
        assert_eq!(ctx.err(), None);
    }

    #[test]
    fn test_cancel_marks_child_done() {
        let (ctx, cancel) = Context::background().with_cancel();
        assert_eq!(ctx.err(), None);

        cancel.cancel();
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }

    #[test]
    fn test_parent_cancel_propagates_to_child() {
        let (parent, cancel_parent) = Context::background().with_cancel();
        let (child, _cancel_child) = parent.with_cancel();

        cancel_parent.cancel();
        assert_eq!(child.err(), Some(ContextError::Canceled));
    }

    #[test]
    fn test_child_cancel_leaves_parent_live() {
        let (parent, _cancel_parent) = Context::background().with_cancel();
        let (child, cancel_child) = parent.with_cancel();

        cancel_child.cancel();
        assert_eq!(child.err(), Some(ContextError::Canceled));
        assert_eq!(parent.err(), None);
    }

    #[test]
    fn test_earlier_parent_deadline_wins() {
        let now = Instant::now();
        let parent = Context::background().with_deadline(now + Duration::from_secs(1));
        let child = parent.with_deadline(now + Duration::from_secs(60));
        assert_eq!(child.deadline(), Some(now + Duration::from_secs(1)));

        let tighter = parent.with_deadline(now + Duration::from_millis(10));
        assert_eq!(tighter.deadline(), Some(now + Duration::from_millis(10)));
    }

    #[test]
    fn test_expired_deadline_reports_error() {
        let ctx = Context::background().with_deadline(Instant::now());
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
    }

    #[test]
    fn test_cancel_reported_before_deadline() {
        let (ctx, cancel) = Context::background()
            .with_deadline(Instant::now())
            .with_cancel();
        cancel.cancel();
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }

    #[tokio::test]
    async fn test_run_completes_when_live() {
        let (ctx, _cancel) = Context::background().with_cancel();
        let ctx = ctx.with_timeout(Duration::from_secs(30));
        assert_eq!(ctx.run(async { 42 }).await, Ok(42));
    }

    #[tokio::test]
    async fn test_run_on_canceled_context_never_polls() {
        let (ctx, cancel) = Context::background().with_cancel();
        cancel.cancel();

        let mut polled = false;
        let result = ctx.run(async { polled = true }).await;
        assert_eq!(result, Err(ContextError::Canceled));
        assert!(!polled);
    }

    #[test]
    fn test_run_stops_when_canceled_mid_flight() {
        let (ctx, cancel) = Context::background().with_cancel();
        let mut fut = task::spawn(ctx.run(pending::<()>()));

        assert_pending!(fut.poll());
        cancel.cancel();
        assert!(fut.is_woken());
        assert_ready_eq!(fut.poll(), Err(ContextError::Canceled));
    }

    #[tokio::test]
    async fn test_run_stops_at_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(20));
        let result = ctx.run(pending::<()>()).await;
        assert_eq!(result, Err(ContextError::DeadlineExceeded));
    }

    #[test]
    fn test_from_token_shares_cancellation() {
        let token = CancellationToken::new();
        let ctx = Context::from(token.clone());
        token.cancel();
        assert_eq!(ctx.err(), Some(ContextError::Canceled));
    }
}
