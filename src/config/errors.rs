use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl { url: String, reason: String },
    InvalidTimeout { value: String },
    InvalidSetting { setting_name: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl { url, reason } => {
                write!(f, "Invalid API base URL '{}': {}", url, reason)
            }
            Self::InvalidTimeout { value } => {
                write!(
                    f,
                    "REQUEST_TIMEOUT_SECS must be a positive number of seconds, got: {}",
                    value
                )
            }
            Self::InvalidSetting { setting_name, reason } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
