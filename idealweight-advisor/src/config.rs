use std::{env, path::PathBuf};

use dotenv::dotenv;

const DEFAULT_MODEL_PATH: &str = "model.ron";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got \"{0}\"")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model_path: PathBuf,
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_env_with(|k| env::var(k).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let model_path = get("MODEL_PATH").unwrap_or_else(|| DEFAULT_MODEL_PATH.into());
        let bind_address = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            model_path: model_path.into(),
            bind_address,
            port,
        })
    }
}
