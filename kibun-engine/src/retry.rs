//! Bounded retry with exponential backoff

use crate::config::RetryPolicy;
use crate::error::ProviderError;

/// Run `call` up to the policy's attempt count
///
/// Retries only failures the error itself marks transient; permanent
/// failures (bad credentials, malformed responses, unsupported
/// provider) propagate immediately. The last error is returned once
/// attempts are exhausted.
pub fn with_backoff<T, F>(policy: &RetryPolicy, mut call: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Result<T, ProviderError>,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_err = None;

    for attempt in 0..attempts {
        match call() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt + 1 < attempts => {
                let delay = policy.delay_for(attempt);
                log::warn!(
                    "transient provider failure (attempt {}/{}), retrying in {:?}: {}",
                    attempt + 1,
                    attempts,
                    delay,
                    err
                );
                std::thread::sleep(delay);
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    // Unreachable with attempts >= 1, but avoid a panic path.
    Err(last_err.unwrap_or(ProviderError::Network {
        provider: "unknown",
        message: "retry loop exhausted without an attempt".into(),
    }))
}
