//! Runtime configuration read from the environment (and `.env`, if present).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::AppError;

const DEFAULT_MESSAGES_API_URL: &str = "http://127.0.0.1:9000/messages";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint returning the member messages
    pub messages_api_url: Url,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
    pub log_format: LogFormat,
    /// Optional JSON file with extra special cases
    pub special_cases_path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads `.env` (if any) and then reads the process environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is the normal case in deployments.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Reads configuration from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let messages_api_url = Url::parse(&var_or("MESSAGES_API_URL", DEFAULT_MESSAGES_API_URL))?;
        if !matches!(messages_api_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "MESSAGES_API_URL must be http(s), got {}",
                messages_api_url
            )));
        }

        let bind_raw = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("Invalid BIND_ADDR '{}': {}", bind_raw, e)))?;

        let timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(AppError::Config(format!(
                        "UPSTREAM_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            Err(_) => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let log_format = match var_or("LOG_FORMAT", "pretty").to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Config(format!(
                    "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    other
                )))
            }
        };

        let special_cases_path = env::var("SPECIAL_CASES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            messages_api_url,
            bind_addr,
            upstream_timeout: Duration::from_secs(timeout_secs),
            log_format,
            special_cases_path,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
