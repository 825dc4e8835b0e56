// Request pacing for outbound calls.
//
// The plagiarism checker talks to two third-party services (the search API
// and arbitrary web pages) and must not hammer either. Every outbound call
// goes through a RequestPacer first. RateLimiter is the default pacer: it
// enforces a minimum interval between dispatches, so with a 1 s interval
// calls go out at most once per second regardless of how fast the previous
// one returned.
//
// The trait is the seam: a token-bucket or adaptive backoff pacer can
// replace RateLimiter without touching the scoring logic.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Something that decides when the next outbound request may go out.
#[async_trait]
pub trait RequestPacer: Send + Sync {
    /// Wait until a request is allowed, then return.
    async fn acquire(&self);
}

/// Minimum-spacing rate limiter.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
}

struct RateLimiterInner {
    /// Minimum time between requests
    interval: Duration,
    /// Dispatch time of the most recently reserved slot
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter that spaces requests at least `interval` apart.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                interval,
                last_request: None,
            })),
        }
    }

    /// A limiter that never waits.
    pub fn unlimited() -> Self {
        Self::with_interval(Duration::ZERO)
    }
}

#[async_trait]
impl RequestPacer for RateLimiter {
    async fn acquire(&self) {
        // Reserve the next free slot under the lock, then sleep outside it.
        // Concurrent callers each get their own slot, one interval apart.
        let slot = {
            let mut inner = self.inner.lock().await;
            let now = Instant::now();
            let slot = match inner.last_request {
                Some(last) => (last + inner.interval).max(now),
                None => now,
            };
            inner.last_request = Some(slot);
            slot
        };

        tokio::time::sleep_until(slot).await;
    }
}
