mod errors;

use std::env;
use std::time::Duration;

use url::Url;

pub use errors::ConfigError;

pub const API_URL_VAR: &str = "TRANSACTIONS_API_URL";
pub const API_TOKEN_VAR: &str = "TRANSACTIONS_API_TOKEN";
pub const API_TIMEOUT_VAR: &str = "TRANSACTIONS_API_TIMEOUT_SECS";
pub const BRAND_NAME_VAR: &str = "BRAND_NAME";
pub const SUPPORT_URL_VAR: &str = "SUPPORT_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BRAND_NAME: &str = "Investment Console";

/// Product branding shown around the console.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Branding {
    pub name: String,
    pub support_url: Option<String>
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: DEFAULT_BRAND_NAME.to_string(),
            support_url: None
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub branding: Branding
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let api_url = value_of(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Url::parse(&api_url).map_err(|error| ConfigError::InvalidApiUrl {
            value: api_url.clone(),
            reason: error.to_string()
        })?;

        let timeout = match value_of(API_TIMEOUT_VAR) {
            Some(value) => match value.parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => return Err(ConfigError::InvalidTimeout(value))
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        };

        let branding = Branding {
            name: value_of(BRAND_NAME_VAR).unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            support_url: value_of(SUPPORT_URL_VAR)
        };

        Ok(Self {
            api_url,
            api_token: value_of(API_TOKEN_VAR),
            timeout,
            branding
        })
    }
}
