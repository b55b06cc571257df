//! Request limiter using governor and Tokio Semaphore.
//!
//! Enforces two limits around each external call:
//! - Requests per minute via the governor crate (GCRA algorithm)
//! - Concurrent in-flight requests via a Tokio Semaphore

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::Semaphore;

// Type alias for our direct rate limiter
type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Limits applied around one external client.
///
/// `requests_per_minute` of `None` disables the RPM quota; the concurrency
/// cap always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ClientLimits {
    /// Requests per minute, `None` for unlimited
    pub requests_per_minute: Option<u32>,
    /// Maximum concurrent in-flight requests
    pub max_concurrent: usize,
}

impl Default for ClientLimits {
    fn default() -> Self {
        Self {
            requests_per_minute: None,
            max_concurrent: 4,
        }
    }
}

/// Rate limiter shared by all calls through one client.
///
/// # Example
///
/// ```rust,ignore
/// let limiter = RequestLimiter::new(ClientLimits::new(Some(30), 4));
/// let _guard = limiter.acquire().await;
/// // make the API call; the concurrent slot releases on drop
/// ```
#[derive(Clone)]
pub struct RequestLimiter {
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
    concurrent_semaphore: Arc<Semaphore>,
}

impl std::fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("rpm_limited", &self.rpm_limiter.is_some())
            .field(
                "available_permits",
                &self.concurrent_semaphore.available_permits(),
            )
            .finish()
    }
}

impl RequestLimiter {
    /// Create a limiter from client limits.
    pub fn new(limits: ClientLimits) -> Self {
        let rpm_limiter = limits.requests_per_minute.and_then(|rpm| {
            NonZeroU32::new(rpm).map(|n| {
                let quota = Quota::per_minute(n);
                Arc::new(GovernorRateLimiter::direct(quota))
            })
        });

        let concurrent_semaphore = Arc::new(Semaphore::new(limits.max_concurrent.max(1)));

        Self {
            rpm_limiter,
            concurrent_semaphore,
        }
    }

    /// Acquire permission for one request.
    ///
    /// Waits until the RPM quota allows the request, then takes a
    /// concurrent slot. Returns a guard that releases the slot when
    /// dropped. The slot is acquired last so a queued caller never holds
    /// concurrency while waiting on quota.
    pub async fn acquire(&self) -> LimiterGuard {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }

        let permit = self
            .concurrent_semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("Semaphore should not be closed");

        LimiterGuard { _permit: permit }
    }
}

/// RAII guard for the request limiter.
///
/// Automatically releases the concurrent request slot when dropped, even
/// if the request fails or panics.
pub struct LimiterGuard {
    _permit: tokio::sync::OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn concurrency_cap_is_enforced() {
        let limiter = RequestLimiter::new(ClientLimits::new(None, 2));

        let first = limiter.acquire().await;
        let _second = limiter.acquire().await;

        // Third slot is unavailable until a guard drops.
        assert_eq!(limiter.concurrent_semaphore.available_permits(), 0);
        drop(first);
        assert_eq!(limiter.concurrent_semaphore.available_permits(), 1);
        let _third = limiter.acquire().await;
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped_to_one() {
        let limiter = RequestLimiter::new(ClientLimits::new(None, 0));
        let _guard = limiter.acquire().await;
    }
}
