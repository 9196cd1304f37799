//! Retry and backoff policy.
//!
//! Encapsulates error classification (timeouts, throttling, connection
//! failures) and exponential backoff decisions so the run loop can give each
//! download a consistent per-file failure boundary.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::TransferError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
