//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3500";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("invalid API_BASE_URL {0:?}: must start with http:// or https://")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Items API base handed to the browser, without a trailing slash.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: default `http://localhost:3500`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let api_base_url = parse_api_base_url(lookup("API_BASE_URL").as_deref())?;
        Ok(Self { port, api_base_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })
}

fn parse_api_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidApiBaseUrl(url.to_owned()))
    }
}
