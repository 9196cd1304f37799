//! `csvgrab links <url>` – print resolved download targets without downloading.

use anyhow::Result;
use csvgrab_core::config::GrabConfig;
use csvgrab_core::run::collect_links;

pub fn run_links(cfg: &GrabConfig, url: &str) -> Result<()> {
    let links = collect_links(cfg, url)?;
    if links.is_empty() {
        println!("No links ending in {} found.", cfg.link_suffix);
        return Ok(());
    }
    for link in &links {
        println!("{link}");
    }
    Ok(())
}
