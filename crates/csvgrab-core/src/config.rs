use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default User-Agent: mimics a desktop browser. Some hosts reject
/// non-browser clients outright, so this is the out-of-the-box value.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per file (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.5,
            max_delay_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/csvgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrabConfig {
    /// Page to harvest when the CLI is invoked without a URL.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Directory downloads are written into (created if absent).
    pub output_dir: PathBuf,
    /// Prefix for derived filenames: `<prefix>_<stem>.<ext>`.
    pub filename_prefix: String,
    /// Suffix an href must end with to be harvested. Case-sensitive.
    pub link_suffix: String,
    /// User-Agent header sent on every request.
    pub user_agent: String,
    /// Unconditional pause before each download request, in seconds.
    pub delay_secs: f64,
    /// Connect timeout for every request, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            output_dir: PathBuf::from("csv_results"),
            filename_prefix: "file".to_string(),
            link_suffix: ".csv".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_secs: 2.0,
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("csvgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GrabConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("csv_results"));
        assert_eq!(cfg.filename_prefix, "file");
        assert_eq!(cfg.link_suffix, ".csv");
        assert!((cfg.delay_secs - 2.0).abs() < 1e-9);
        assert!(cfg.source_url.is_none());
        assert!(cfg.retry.is_none());
        assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GrabConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GrabConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.filename_prefix, cfg.filename_prefix);
        assert_eq!(parsed.link_suffix, cfg.link_suffix);
        assert_eq!(parsed.user_agent, cfg.user_agent);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            source_url = "https://example.com/listing.htm"
            output_dir = "out/csv"
            filename_prefix = "facility"
            link_suffix = ".tsv"
            user_agent = "csvgrab-test"
            delay_secs = 0.0
            connect_timeout_secs = 5
            request_timeout_secs = 60
        "#;
        let cfg: GrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.source_url.as_deref(),
            Some("https://example.com/listing.htm")
        );
        assert_eq!(cfg.output_dir, PathBuf::from("out/csv"));
        assert_eq!(cfg.filename_prefix, "facility");
        assert_eq!(cfg.link_suffix, ".tsv");
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_retry_section() {
        let toml = r#"
            output_dir = "csv_results"
            filename_prefix = "file"
            link_suffix = ".csv"
            user_agent = "ua"
            delay_secs = 2.0
            connect_timeout_secs = 15
            request_timeout_secs = 300

            [retry]
            max_attempts = 5
            base_delay_secs = 0.25
            max_delay_secs = 10
        "#;
        let cfg: GrabConfig = toml::from_str(toml).unwrap();
        let retry = cfg.retry.as_ref().unwrap();
        assert_eq!(retry.max_attempts, 5);
        assert!((retry.base_delay_secs - 0.25).abs() < 1e-9);
        assert_eq!(retry.max_delay_secs, 10);
    }
}
