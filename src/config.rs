// src/config.rs
use std::{fmt::Debug, net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// How provider failures reach the HTTP caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Always 200, failure text prefixed with `Gemini Error: `.
    #[default]
    Legacy,
    /// Non-200 status plus a tagged error object.
    Structured,
}

impl FromStr for ErrorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ErrorMode::Legacy),
            "structured" => Ok(ErrorMode::Structured),
            _ => Err(()),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub request_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
    pub error_mode: ErrorMode,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("error_mode", &self.error_mode)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = get("GEMINI_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::Invalid { key: "GEMINI_TIMEOUT_SECS", value: raw }),
            },
            None => None,
        };

        let bind_raw = get("PATHFINDER_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "PATHFINDER_BIND", value: bind_raw.clone() })?;

        let error_mode = match get("PATHFINDER_ERROR_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PATHFINDER_ERROR_MODE", value: raw.clone() })?,
            None => ErrorMode::default(),
        };

        Ok(Self { api_key, model, api_base, request_timeout, bind_addr, error_mode })
    }
}
