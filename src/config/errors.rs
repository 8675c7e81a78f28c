use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL [{value}]: {reason}")]
    InvalidApiUrl {
        value: String,
        reason: String
    },
    #[error("Invalid timeout [{0}]: expected a positive number of seconds")]
    InvalidTimeout(String)
}
