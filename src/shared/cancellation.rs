//! External cancellation for graph operations.
//!
//! Every operation in this crate is a plain future, so dropping it abandons
//! any in-flight request. Documents are only written to the cache after a
//! complete decode, which means an abandoned fetch never leaves a partial
//! entry behind. `with_cancellation` lets callers drive that drop from a
//! shared [`CancellationToken`].

use crate::shared::{GraphError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Runs `operation` until it completes or `token` is cancelled.
///
/// The token is checked first, so an already-cancelled token never starts
/// the operation.
pub async fn with_cancellation<T, F>(token: &CancellationToken, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if token.is_cancelled() {
        return Err(GraphError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("graph operation cancelled");
            Err(GraphError::Cancelled)
        }
        result = operation => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let result = with_cancellation(&token, async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let result: Result<()> = with_cancellation(&token, async {
            panic!("operation must not be polled");
        })
        .await;
        assert!(matches!(result, Err(GraphError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_during_operation() {
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            child.cancel();
        });

        let result: Result<()> = with_cancellation(&token, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(GraphError::Cancelled)));
    }

    #[tokio::test]
    async fn test_operation_error_propagates() {
        let token = CancellationToken::new();
        let result: Result<()> = with_cancellation(&token, async {
            Err(GraphError::InvalidData {
                details: "boom".to_string(),
            })
        })
        .await;
        assert!(matches!(result, Err(GraphError::InvalidData { .. })));
    }
}
