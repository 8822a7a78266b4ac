//! Retry policy for transient transport failures

use std::time::Duration;

/// Exponential backoff policy for a request
///
/// A request gets `times - 1` guarded attempts, sleeping between them with
/// the delay doubling up to `max_delay`, followed by one final attempt whose
/// error propagates to the caller. The default performs a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts (1 = no retry)
    pub times: u32,
    /// Delay before the second attempt
    pub initial_delay: Duration,
    /// Upper bound for the backoff delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            times: 1,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// A policy with the given number of attempts and default delays
    pub fn times(times: u32) -> Self {
        Self {
            times,
            ..Self::default()
        }
    }

    /// Set the initial delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// The sequence of sleeps between guarded attempts: initial delay
    /// doubling each step, capped at `max_delay`
    pub(crate) fn delays(&self) -> impl Iterator<Item = Duration> {
        let max = self.max_delay;
        let mut next = self.initial_delay;
        std::iter::from_fn(move || {
            let current = next.min(max);
            next = (next * 2).min(max);
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.times, 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::times(6)
            .with_initial_delay(Duration::from_secs(1))
            .with_max_delay(Duration::from_secs(5));

        let delays: Vec<_> = policy.delays().take(5).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(5),
                Duration::from_secs(5),
            ]
        );
    }
}
