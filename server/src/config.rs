//! Environment configuration, read once at startup.
//!
//! `HOST`/`PORT` choose the listening address and `STORE_URL` is the
//! persistence connection string handed to the store. A `PORT` that does
//! not parse is a startup error, not a silent fallback.

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STORE_URL: &str = "memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(env::var("PORT").ok())?;
        let store_url =
            env::var("STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        Ok(Self {
            host,
            port,
            store_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_PORT);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_port_uses_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some(String::new())).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("  ".to_string())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn valid_port_is_parsed() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 9000 ".to_string())).unwrap(), 9000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(matches!(
            parse_port(Some("not-a-port".to_string())),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            parse_port(Some("70000".to_string())),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            store_url: DEFAULT_STORE_URL.to_string(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }
}
