//! Error type for a single HTTP transfer (page fetch or file download).

use thiserror::Error;

/// Error from one transfer attempt. Kept as a typed enum (rather than anyhow)
/// so the retry policy can classify it before the caller gives up.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local I/O failed while writing the response body.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
