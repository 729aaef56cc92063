// ABOUTME: Retry policy for establishing the gateway TCP connection
// ABOUTME: Bounded attempts with exponential backoff, plus the legacy equal-to-limit rule

use std::time::Duration;

/// Attempt limit used when the options do not set one
pub const DEFAULT_MAX_RETRY_LIMIT: u32 = 3;

/// Base delay between connect attempts
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Upper bound for a single backoff delay
pub const MAX_RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// How the attempt limit is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryMode {
    /// Make up to `max_attempts` attempts in total, then give up
    #[default]
    Bounded,

    /// After a failed attempt, retry only when the attempt counter equals
    /// `max_attempts`.
    ///
    /// With a limit of 1 this makes two attempts; with any other limit it
    /// makes one. Deployments tuned against that behavior can opt into it.
    Legacy,
}

/// Connect retry policy
///
/// # Example
///
/// ```rust
/// use smsgw::client::{RetryMode, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3).with_backoff(Duration::from_millis(100));
/// assert!(policy.should_retry(1));
/// assert!(policy.should_retry(2));
/// assert!(!policy.should_retry(3));
///
/// let legacy = RetryPolicy::new(3).with_mode(RetryMode::Legacy);
/// assert!(!legacy.should_retry(1));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
    max_backoff: Duration,
    mode: RetryMode,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRY_LIMIT)
    }
}

impl RetryPolicy {
    /// A bounded policy. The first attempt is always made, so a limit of
    /// zero behaves like a limit of one in either mode.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: DEFAULT_RETRY_BACKOFF,
            max_backoff: MAX_RETRY_BACKOFF,
            mode: RetryMode::Bounded,
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    pub fn with_mode(mut self, mode: RetryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn mode(&self) -> RetryMode {
        self.mode
    }

    /// Whether another attempt follows the failed attempt number `attempt` (1-based)
    pub fn should_retry(&self, attempt: u32) -> bool {
        match self.mode {
            RetryMode::Bounded => attempt < self.max_attempts,
            RetryMode::Legacy => attempt == self.max_attempts,
        }
    }

    /// Delay before the attempt following `attempt`: base * 2^(attempt - 1), capped
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.backoff
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }

    /// Total number of attempts this policy makes when every attempt fails
    pub fn total_attempts(&self) -> u32 {
        let mut attempt = 1;
        while self.should_retry(attempt) {
            attempt += 1;
        }
        attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.mode(), RetryMode::Bounded);
        assert_eq!(policy.backoff(1), Duration::from_millis(200));
    }

    #[test]
    fn test_bounded_retries_up_to_limit() {
        let policy = RetryPolicy::new(3);
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
        assert_eq!(policy.total_attempts(), 3);

        assert_eq!(RetryPolicy::new(1).total_attempts(), 1);
        assert_eq!(RetryPolicy::new(0).total_attempts(), 1);
    }

    #[test]
    fn test_legacy_retries_only_at_limit() {
        let policy = RetryPolicy::new(3).with_mode(RetryMode::Legacy);
        assert!(!policy.should_retry(1));
        assert!(!policy.should_retry(2));
        assert!(policy.should_retry(3));
        assert_eq!(policy.total_attempts(), 1);

        let policy = RetryPolicy::new(1).with_mode(RetryMode::Legacy);
        assert!(policy.should_retry(1));
        assert!(!policy.should_retry(2));
        assert_eq!(policy.total_attempts(), 2);
    }

    #[test]
    fn test_zero_limit_makes_one_attempt() {
        assert_eq!(RetryPolicy::new(0).total_attempts(), 1);

        let legacy = RetryPolicy::new(0).with_mode(RetryMode::Legacy);
        assert!(!legacy.should_retry(1));
        assert_eq!(legacy.total_attempts(), 1);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(10)
            .with_backoff(Duration::from_millis(100))
            .with_max_backoff(Duration::from_millis(500));

        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(2), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(400));
        assert_eq!(policy.backoff(4), Duration::from_millis(500));
        assert_eq!(policy.backoff(40), Duration::from_millis(500));
    }
}
