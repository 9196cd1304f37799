//! Single-stream HTTP GET downloader.
//!
//! Streams the response body to a `.part` file next to the final path, then
//! renames it into place once the transfer and status check succeed.

use crate::fetch::{configure, HttpOptions};
use crate::retry::TransferError;
use crate::storage;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Downloads `url` to `final_path`, overwriting any existing file.
/// Returns the number of bytes written.
pub fn download_to_file(
    url: &str,
    opts: &HttpOptions,
    final_path: &Path,
) -> Result<u64, TransferError> {
    let temp = storage::temp_path(final_path);
    let mut file = File::create(&temp)?;
    let mut written: u64 = 0;
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, opts)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!(url, error = %e, "download write failed");
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        if let Err(e) = transfer.perform() {
            drop(transfer);
            storage::discard_temp(&temp);
            // A write failure surfaces as a curl "aborted by callback" error;
            // report the underlying IO cause instead.
            return Err(match write_error {
                Some(io) => TransferError::Io(io),
                None => TransferError::Curl(e),
            });
        }
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        storage::discard_temp(&temp);
        return Err(TransferError::Http(code));
    }

    file.sync_all()?;
    drop(file);
    storage::finalize(&temp, final_path)
        .map_err(|e| TransferError::Io(std::io::Error::other(format!("{e:#}"))))?;

    Ok(written)
}
