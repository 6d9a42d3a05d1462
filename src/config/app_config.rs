use crate::{
    error::{AppError, Result},
    viewmodels::carousel::DEFAULT_AUTOPLAY,
};
use std::{env, path::PathBuf};

/// API location baked in at build time; `API_URL` in the runtime environment still wins.
const BUILD_API_URL: Option<&str> = option_env!("API_URL");
const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub carousel: CarouselConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub autoplay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api: ApiConfig {
                base_url: lookup("API_URL")
                    .or_else(|| BUILD_API_URL.map(str::to_string))
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs: lookup("API_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid API_TIMEOUT_SECS value".to_string()))?,
            },
            session: SessionConfig {
                file: lookup("SESSION_FILE")
                    .unwrap_or_else(|| ".storefront_session".to_string())
                    .into(),
            },
            carousel: CarouselConfig {
                autoplay_ms: lookup("CAROUSEL_AUTOPLAY_MS")
                    .unwrap_or_else(|| DEFAULT_AUTOPLAY.as_millis().to_string())
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or_else(|| {
                        AppError::ConfigError("Invalid CAROUSEL_AUTOPLAY_MS value".to_string())
                    })?,
            },
        })
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 30,
        }
    }
}
