use crate::utils::error::{FetchError, Result};
use std::future::Future;
use std::time::Duration;

/// Interval and attempt cap for waiting on an asynchronous job. Both come
/// from configuration, never from literals at the call site.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

/// Reissues `call` at a fixed interval while it keeps failing with the
/// distinguished not-ready status.
///
/// Any other error surfaces immediately with no retry; a success returns
/// the response. When the attempt cap is exhausted while still not ready,
/// the wait ends as a timeout-class failure carrying the attempt count.
/// The sleep is a cooperative await, so an enclosing deadline can cancel
/// a stuck wait mid-interval.
pub async fn poll_until_ready<T, F, Fut>(config: &PollerConfig, mut call: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut remaining = config.max_attempts;
    loop {
        match call().await {
            Err(error) if error.is_not_ready() => {
                remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    return Err(FetchError::PollTimeout {
                        attempts: config.max_attempts,
                    });
                }
                tracing::debug!(
                    "report not ready, {} attempts remaining (retry in {:?})",
                    remaining,
                    config.interval
                );
                tokio::time::sleep(config.interval).await;
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plaid::PlaidApiError;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn not_ready() -> FetchError {
        FetchError::Plaid(PlaidApiError {
            error_type: "ASSET_REPORT_ERROR".to_string(),
            error_code: "PRODUCT_NOT_READY".to_string(),
            error_message: "the requested product is not yet ready".to_string(),
            display_message: None,
            request_id: None,
            extra: serde_json::Map::new(),
        })
    }

    fn hard_error() -> FetchError {
        FetchError::Plaid(PlaidApiError {
            error_type: "INVALID_INPUT".to_string(),
            error_code: "INVALID_ACCESS_TOKEN".to_string(),
            error_message: "invalid access token".to_string(),
            display_message: None,
            request_id: None,
            extra: serde_json::Map::new(),
        })
    }

    fn config() -> PollerConfig {
        PollerConfig {
            max_attempts: 10,
            interval: Duration::from_secs(1),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ready_on_last_attempt_after_nine_waits() {
        let calls = Arc::new(AtomicU32::new(0));
        let started = tokio::time::Instant::now();

        let counter = calls.clone();
        let result = poll_until_ready(&config(), move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 10 {
                    Err(not_ready())
                } else {
                    Ok("ready")
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(result, "ready");
        assert_eq!(calls.load(Ordering::SeqCst), 10);
        // 9 intervening waits of 1s each; paused time advances exactly.
        assert_eq!(started.elapsed(), Duration::from_secs(9));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_after_attempt_cap() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let error = poll_until_ready::<&str, _, _>(&config(), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(not_ready())
            }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 10);
        match error {
            FetchError::PollTimeout { attempts } => assert_eq!(attempts, 10),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_hard_error_surfaces_immediately() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let error = poll_until_ready::<&str, _, _>(&config(), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(hard_error())
            }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        match error {
            FetchError::Plaid(e) => assert_eq!(e.error_code, "INVALID_ACCESS_TOKEN"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
