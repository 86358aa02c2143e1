use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Spaces requests evenly at `per_second`, without bursts.
pub fn geocoder_limiter(per_second: NonZeroU32) -> Limiter {
    let quota = Quota::per_second(per_second).allow_burst(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(quota))
}

/// Blocks the calling thread until the limiter grants a request.
pub fn wait_for_permit(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        let wait = not_until.wait_time_from(clock.now());
        log::debug!("Geocoder rate limit reached, waiting {:?}", wait);
        std::thread::sleep(wait);
    }
}
