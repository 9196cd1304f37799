//! HTTP GET for the source page.
//!
//! Uses the curl crate (libcurl). The body is buffered in memory (listing
//! pages are small); a non-2xx status is a typed error so the caller can
//! short-circuit before trying to parse an error page.

use crate::config::GrabConfig;
use crate::retry::TransferError;
use std::time::Duration;

/// Per-request knobs shared by the page fetch and the file downloads.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// User-Agent header sent on every request.
    pub user_agent: String,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Overall transfer timeout.
    pub timeout: Duration,
}

impl HttpOptions {
    pub fn from_config(cfg: &GrabConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

/// Configure an Easy handle with the shared request options.
pub(crate) fn configure(easy: &mut curl::easy::Easy, url: &str, opts: &HttpOptions) -> Result<(), TransferError> {
    easy.url(url)?;
    easy.useragent(&opts.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    Ok(())
}

/// Performs a GET and returns the full body on a 2xx response.
///
/// Follows redirects. Returns `TransferError::Http(code)` on any other status.
pub fn get_bytes(url: &str, opts: &HttpOptions) -> Result<Vec<u8>, TransferError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, opts)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
    if !(200..300).contains(&code) {
        return Err(TransferError::Http(code));
    }

    Ok(body)
}
