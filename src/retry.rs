//! Retry policy for the HTTP binding

use std::time::Duration;
use log::debug;

/// Exponential backoff between attempts
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy
{   pub max_retries: usize
  , pub backoff_multiplier: f32
  , pub initial_backoff: Duration
}

impl RetryPolicy
{   pub fn new(
      max_retries: usize
    , backoff_multiplier: f32
    , initial_backoff_ms: u64
    ) -> Self
    {   RetryPolicy
        {   max_retries
          , backoff_multiplier
          , initial_backoff: Duration::from_millis(
              initial_backoff_ms
            )
        }
    }

    /// Default backoff with a caller-chosen retry limit
    pub fn with_max_retries(max_retries: usize) -> Self
    {   RetryPolicy
        {   max_retries
          , ..RetryPolicy::default()
        }
    }

    /// Wait before retry number `attempt` (0-based)
    pub fn backoff_for_attempt(
      &self
    , attempt: usize
    ) -> Duration
    {   let multiplier
          = self.backoff_multiplier.powi(attempt as i32);
        let backoff = Duration::from_millis(
          (self.initial_backoff.as_millis() as f32
            * multiplier) as u64
        );
        debug!("Backoff for attempt {}: {:?}", attempt, backoff);
        backoff
    }

    /// Whether a failed attempt should be tried again
    pub fn should_retry(
      &self
    , attempt: usize
    , error: &crate::error::Error
    ) -> bool
    {   attempt < self.max_retries
          && matches!(error, crate::error::Error::HttpError(_))
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::new(2, 2.0, 100)
    }
}
