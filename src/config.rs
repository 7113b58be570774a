use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub home_listing_limit: usize,
    pub toast_ttl_ms: u64,
    pub toast_max_visible: usize,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
}

impl UiConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/api".to_string(),
                request_timeout_secs: None,
            },
            ui: UiConfig {
                home_listing_limit: 3,
                toast_ttl_ms: 5000,
                toast_max_visible: 3,
                tick_rate_ms: 100,
            },
            logging: LoggingConfig {
                log_dir: default_log_dir(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            api: ApiConfig {
                base_url: env::var("JOB_BOARD_API_URL").unwrap_or(defaults.api.base_url),
                request_timeout_secs: env::var("JOB_BOARD_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .map(|s| s.parse::<u64>())
                    .transpose()?,
            },
            ui: UiConfig {
                home_listing_limit: env::var("JOB_BOARD_HOME_LIMIT")
                    .unwrap_or_else(|_| defaults.ui.home_listing_limit.to_string())
                    .parse()?,
                toast_ttl_ms: env::var("JOB_BOARD_TOAST_TTL_MS")
                    .unwrap_or_else(|_| defaults.ui.toast_ttl_ms.to_string())
                    .parse()?,
                toast_max_visible: env::var("JOB_BOARD_TOAST_MAX")
                    .unwrap_or_else(|_| defaults.ui.toast_max_visible.to_string())
                    .parse()?,
                tick_rate_ms: env::var("JOB_BOARD_TICK_MS")
                    .unwrap_or_else(|_| defaults.ui.tick_rate_ms.to_string())
                    .parse()?,
            },
            logging: LoggingConfig {
                log_dir: env::var("JOB_BOARD_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logging.log_dir),
            },
        })
    }
}

/// Platform data directory, falling back to the working directory
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("job-board")
        .join("logs")
}
