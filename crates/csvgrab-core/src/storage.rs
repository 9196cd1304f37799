//! Disk I/O and file lifecycle.
//!
//! Downloads stream into a `.part` temp file and are atomically renamed over
//! the final path on success, so a failed transfer never leaves a truncated
//! file under the final name. Overwrite-on-conflict is intentional: the
//! rename replaces any previous artifact of the same name.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `file_vt.csv` → `file_vt.csv.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Ensures the output directory exists. Creates it recursively; succeeding
/// when it is already present.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Atomically moves a completed temp file over the final path.
pub fn finalize(temp: &Path, final_path: &Path) -> Result<()> {
    fs::rename(temp, final_path).with_context(|| {
        format!(
            "failed to finalize {} -> {}",
            temp.display(),
            final_path.display()
        )
    })
}

/// Removes a temp file left behind by a failed transfer. Best effort.
pub fn discard_temp(temp: &Path) {
    if let Err(e) = fs::remove_file(temp) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %temp.display(), error = %e, "failed to remove temp file");
        }
    }
}
