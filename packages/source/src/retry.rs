//! HTTP retry with exponential backoff.
//!
//! Every stats API request goes through [`send_json`], which retries
//! transient failures (timeouts, connection errors, HTTP 429, HTTP 5xx)
//! and re-fetches when a body arrives but does not decode as JSON. Other
//! 4xx responses are permanent and fail immediately.

use std::time::Duration;

use reqwest::StatusCode;

use crate::SourceError;

/// Maximum length of the response body preview included in error logs.
const BODY_PREVIEW_LEN: usize = 500;

/// How many times, and how patiently, to retry a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after a transient connection-level failure.
    pub max_retries: u32,
    /// Full re-fetches after a body that fails to decode.
    pub max_body_retries: u32,
    /// Delay before the first retry; doubled on each subsequent one.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            max_body_retries: 2,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            max_body_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Backoff before retry number `attempt` (1-based): `base`, `2 * base`,
    /// `4 * base`, ...
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }
}

/// Whether a response status is worth retrying.
#[must_use]
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Returns `true` if the error is likely transient and worth retrying.
fn is_transient(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_body() || e.is_decode() || e.is_request()
}

fn preview(text: &str) -> &str {
    if text.len() <= BODY_PREVIEW_LEN {
        return text;
    }
    let mut end = BODY_PREVIEW_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Sends an HTTP request and parses the response body as JSON.
///
/// `build_request` is called once per attempt, since a
/// [`reqwest::RequestBuilder`] is consumed by sending it.
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails after all retries, the
/// server answers with a non-retryable status, or the body still does not
/// decode after all body retries.
#[allow(clippy::future_not_send)]
pub async fn send_json<F>(
    policy: &RetryPolicy,
    build_request: F,
) -> Result<serde_json::Value, SourceError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut body_attempt = 0;
    loop {
        let response = send_inner(policy, &build_request).await?;
        let url = response.url().to_string();
        let status = response.status();

        let failure = match response.text().await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("body preview for {url}: {}", preview(&text));
                    SourceError::Normalization {
                        message: format!(
                            "JSON parse failed: {e} (status={status}, received {} bytes)",
                            text.len()
                        ),
                    }
                }
            },
            Err(e) => SourceError::Http(e),
        };

        if body_attempt >= policy.max_body_retries {
            log::error!(
                "giving up on {url} after {} body retries: {failure}",
                policy.max_body_retries
            );
            return Err(failure);
        }
        body_attempt += 1;
        let delay = policy.delay(body_attempt);
        log::warn!(
            "unreadable response from {url} ({failure}), re-fetching in {delay:?} \
             (body retry {body_attempt}/{})",
            policy.max_body_retries
        );
        tokio::time::sleep(delay).await;
    }
}

/// Connection-level retry loop. Returns the first response with a
/// non-error status.
#[allow(clippy::future_not_send)]
async fn send_inner<F>(
    policy: &RetryPolicy,
    build_request: &F,
) -> Result<reqwest::Response, SourceError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut attempt = 0;
    loop {
        let failure = match build_request().send().await {
            Err(e) if is_transient(&e) => SourceError::Http(e),
            Err(e) => return Err(SourceError::Http(e)),
            Ok(response) => {
                let status = response.status();
                if is_retryable_status(status) {
                    SourceError::Normalization {
                        message: format!("HTTP {status}"),
                    }
                } else if status.is_client_error() {
                    return Err(SourceError::Normalization {
                        message: format!("HTTP {status}"),
                    });
                } else {
                    return Ok(response);
                }
            }
        };

        if attempt >= policy.max_retries {
            return Err(match failure {
                SourceError::Normalization { message } => SourceError::Normalization {
                    message: format!("{message} after {} retries", policy.max_retries),
                },
                other => other,
            });
        }
        attempt += 1;
        let delay = policy.delay(attempt);
        log::warn!(
            "transient error: {failure}; retry {attempt}/{} in {delay:?}",
            policy.max_retries
        );
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles() {
        let policy = RetryPolicy {
            base_delay: Duration::from_millis(500),
            ..RetryPolicy::default()
        };
        assert_eq!(policy.delay(1), Duration::from_millis(500));
        assert_eq!(policy.delay(2), Duration::from_secs(1));
        assert_eq!(policy.delay(4), Duration::from_secs(4));
    }

    #[test]
    fn backoff_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay(200), Duration::from_secs(u64::from(u32::MAX)));
        assert_eq!(RetryPolicy::none().delay(3), Duration::ZERO);
    }

    #[test]
    fn retryable_statuses() {
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::BAD_REQUEST));
        assert!(!is_retryable_status(StatusCode::OK));
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let text = "é".repeat(400);
        let p = preview(&text);
        assert!(p.len() <= BODY_PREVIEW_LEN);
        assert!(text.starts_with(p));
        assert_eq!(preview("short"), "short");
    }
}
