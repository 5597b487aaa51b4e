//! Per-user rate limiting for mood analysis, backed by `governor`

use std::num::NonZeroU32;
use std::time::Duration;

use governor::{
    clock::{Clock, DefaultClock},
    middleware::NoOpMiddleware,
    state::keyed::HashMapStateStore,
    Quota,
};

/// Default burst of mood analysis requests per user
pub const ANALYSIS_MAX_REQUESTS: u32 = 10;

/// Time for a user's full burst to replenish
pub const ANALYSIS_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Forget idle keys once the store grows past this many users
const RETAIN_THRESHOLD: usize = 10_000;

type KeyedLimiter<C> = governor::RateLimiter<
    String,
    HashMapStateStore<String>,
    C,
    NoOpMiddleware<<C as Clock>::Instant>,
>;

/// Allows `max_requests` per key up front, then one more every
/// `window / max_requests`
pub struct RateLimiter<C: Clock = DefaultClock> {
    limiter: KeyedLimiter<C>,
    clock: C,
}

impl RateLimiter<DefaultClock> {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_clock(max_requests, window, DefaultClock::default())
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(max_requests: u32, window: Duration, clock: C) -> Self {
        let burst = NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(window / burst.get())
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: governor::RateLimiter::hashmap_with_clock(quota, &clock),
            clock,
        }
    }

    /// Record a request for `key`
    ///
    /// Returns `Err(retry_after)` when the key has no request left.
    pub fn check(&self, key: &str) -> Result<(), Duration> {
        if self.limiter.len() > RETAIN_THRESHOLD {
            self.limiter.retain_recent();
        }

        self.limiter
            .check_key(&key.to_string())
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()))
    }
}
