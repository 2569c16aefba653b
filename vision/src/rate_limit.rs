use std::time::{Duration, Instant};

/// Admits at most one event per `min_interval`
///
/// Time is passed in by the caller, so the limiter is deterministic under test.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns `true` and records `now` if enough time has passed since the
    /// last accepted event.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let ready = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
            None => true,
        };
        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }

    /// Forgets the last event; the next call is admitted.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_admitted() {
        let mut limiter = RateLimiter::new(Duration::from_secs(1));
        assert!(limiter.try_acquire(Instant::now()));
    }

    #[test]
    fn test_at_most_one_per_interval() {
        let mut limiter = RateLimiter::new(Duration::from_millis(1000));
        let start = Instant::now();

        let admitted = (0..30)
            .map(|i| start + Duration::from_millis(i * 100))
            .filter(|&t| limiter.try_acquire(t))
            .count();

        // t = 0, 1000, 2000 ms
        assert_eq!(admitted, 3);
    }

    #[test]
    fn test_reset_readmits() {
        let mut limiter = RateLimiter::new(Duration::from_secs(10));
        let now = Instant::now();

        assert!(limiter.try_acquire(now));
        assert!(!limiter.try_acquire(now));
        limiter.reset();
        assert!(limiter.try_acquire(now));
    }

    #[test]
    fn test_clock_going_backwards_is_rejected() {
        let mut limiter = RateLimiter::new(Duration::from_millis(10));
        let now = Instant::now() + Duration::from_secs(1);

        assert!(limiter.try_acquire(now));
        assert!(!limiter.try_acquire(now - Duration::from_millis(500)));
    }
}
