//! The sequential harvest-and-download run.
//!
//! One pass: fetch the page, harvest matching links, ensure the output
//! directory, then download each target in document order with a fixed
//! inter-request delay. A target that still fails after retries is recorded
//! and the run continues; only page-fetch and setup failures abort.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::config::GrabConfig;
use crate::download::download_to_file;
use crate::fetch::{get_bytes, HttpOptions};
use crate::harvest::harvest_links;
use crate::retry::{run_with_retry, RetryPolicy, TransferError};
use crate::storage;
use crate::url_model::derive_target_filename;

/// A target that failed after exhausting its retries.
#[derive(Debug)]
pub struct FailedDownload {
    pub url: Url,
    pub error: TransferError,
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Resolved targets in document order (duplicates included).
    pub links: Vec<Url>,
    /// Files written, in completion order.
    pub downloaded: Vec<PathBuf>,
    /// Targets that failed after retries, in document order.
    pub failed: Vec<FailedDownload>,
}

impl RunReport {
    /// True when every harvested target was downloaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches `page_url`, harvests links, and downloads each into `output_dir`.
///
/// The page fetch short-circuits the run on any failure (including a non-2xx
/// status); per-target download failures are collected in the report instead
/// of aborting the remaining targets.
pub fn run_harvest(cfg: &GrabConfig, page_url: &str, output_dir: &Path) -> Result<RunReport> {
    let page = Url::parse(page_url).with_context(|| format!("invalid page URL: {page_url}"))?;
    let opts = HttpOptions::from_config(cfg);

    let body = get_bytes(page.as_str(), &opts)
        .with_context(|| format!("failed to fetch page {page}"))?;
    let html = String::from_utf8_lossy(&body);
    let links = harvest_links(&page, &html, &cfg.link_suffix);

    storage::ensure_dir(output_dir)?;

    let policy = RetryPolicy::from_config(cfg.retry.as_ref());
    let delay = Duration::from_secs_f64(cfg.delay_secs.max(0.0));
    let ext = cfg.link_suffix.trim_start_matches('.');

    let mut report = RunReport {
        links: links.clone(),
        ..RunReport::default()
    };

    for target in &links {
        // Unconditional pause before every request, success or not.
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let filename = derive_target_filename(target, &cfg.filename_prefix, ext);
        let final_path = output_dir.join(&filename);

        match run_with_retry(&policy, || {
            download_to_file(target.as_str(), &opts, &final_path)
        }) {
            Ok(bytes) => {
                tracing::info!(url = %target, path = %final_path.display(), bytes, "downloaded");
                report.downloaded.push(final_path);
            }
            Err(e) => {
                tracing::warn!(url = %target, error = %e, "download failed, continuing");
                report.failed.push(FailedDownload {
                    url: target.clone(),
                    error: e,
                });
            }
        }
    }

    tracing::info!(
        downloaded = report.downloaded.len(),
        failed = report.failed.len(),
        "run complete"
    );
    Ok(report)
}

/// Harvest only: fetches the page and returns the resolved targets without
/// downloading anything.
pub fn collect_links(cfg: &GrabConfig, page_url: &str) -> Result<Vec<Url>> {
    let page = Url::parse(page_url).with_context(|| format!("invalid page URL: {page_url}"))?;
    let opts = HttpOptions::from_config(cfg);
    let body = get_bytes(page.as_str(), &opts)
        .with_context(|| format!("failed to fetch page {page}"))?;
    let html = String::from_utf8_lossy(&body);
    Ok(harvest_links(&page, &html, &cfg.link_suffix))
}
