//! `csvgrab run [url]` – full harvest-and-download run.

use anyhow::{bail, Result};
use csvgrab_core::config::GrabConfig;
use csvgrab_core::run::run_harvest;
use std::path::PathBuf;

pub fn run_run(
    mut cfg: GrabConfig,
    url: Option<&str>,
    output_dir: Option<PathBuf>,
    prefix: Option<String>,
    delay_secs: Option<f64>,
) -> Result<()> {
    if let Some(dir) = output_dir {
        cfg.output_dir = dir;
    }
    if let Some(p) = prefix {
        cfg.filename_prefix = p;
    }
    if let Some(d) = delay_secs {
        cfg.delay_secs = d;
    }

    let page_url = match url.or(cfg.source_url.as_deref()) {
        Some(u) => u.to_string(),
        None => bail!("no URL given and no source_url set in the config file"),
    };

    let out_dir = cfg.output_dir.clone();
    let report = run_harvest(&cfg, &page_url, &out_dir)?;

    println!("Harvested {} link(s) from {page_url}:", report.links.len());
    for link in &report.links {
        println!("  {link}");
    }
    for path in &report.downloaded {
        println!("Downloaded {}", path.display());
    }
    if report.is_complete() {
        println!("All downloaded");
    } else {
        println!(
            "Done with {} failure(s) of {}:",
            report.failed.len(),
            report.links.len()
        );
        for f in &report.failed {
            println!("  {}: {}", f.url, f.error);
        }
    }
    Ok(())
}
