use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_API_TOKEN: &str = "Dummy_Key_1608";
pub const DEFAULT_APPLICATIONS_PATH: &str = "/applications";

/// Settings for the mock ATS server binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub data_dir: PathBuf,
    pub api_token: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_token = get_env_or("MOCK_ATS_TOKEN", DEFAULT_API_TOKEN);
        if api_token.trim().is_empty() {
            return Err(Error::Config("MOCK_ATS_TOKEN must not be empty".to_string()));
        }

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            data_dir: PathBuf::from(get_env_or("MOCK_ATS_DATA_DIR", DEFAULT_DATA_DIR)),
            api_token,
        })
    }
}

/// Connection settings the adapter uses to reach an upstream ATS.
///
/// Variable names follow the function runtime's environment:
/// `AtsBaseUrl`, `AtsApiKey` and the optional `AtsApplicationsPath`.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub base_url: String,
    pub api_key: String,
    pub applications_path: String,
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("AtsBaseUrl").filter(|v| !v.trim().is_empty());
        let api_key = lookup("AtsApiKey").filter(|v| !v.trim().is_empty());

        let (Some(base_url), Some(api_key)) = (base_url, api_key) else {
            return Err(Error::Config(
                "Missing AtsBaseUrl or AtsApiKey environment variables".to_string(),
            ));
        };

        let applications_path = lookup("AtsApplicationsPath")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APPLICATIONS_PATH.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            applications_path,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
