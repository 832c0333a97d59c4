use std::env;

use thiserror::Error;

pub const BASE_URL_ENV: &str = "REQUEST_CLIENT_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_ENV))?;

        Ok(Self { base_url })
    }
}
