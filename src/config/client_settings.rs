use std::time::Duration;

use reqwest::Url;

use super::{ConfigError, EnvironmentProvider, SystemEnvironment};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3032/asset-t1/";
const DEFAULT_STORAGE_DATABASE_URL: &str = "sqlite://asset_portal.db?mode=rwc";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the backend and the local session storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    api_base_url: String,
    storage_database_url: String,
    request_timeout: Duration,
}

impl ClientSettings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_provider(&SystemEnvironment)
    }

    /// Load settings from an arbitrary provider
    ///
    /// Reads `API_BASE_URL`, `STORAGE_DATABASE_URL` and `REQUEST_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset.
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let api_base_url = env
            .get_non_empty("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::validate_base_url(&api_base_url)?;

        let storage_database_url = env
            .get_non_empty("STORAGE_DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_STORAGE_DATABASE_URL.to_string());
        if !storage_database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidSetting {
                setting_name: "STORAGE_DATABASE_URL".to_string(),
                reason: "only sqlite URLs are supported".to_string(),
            });
        }

        let request_timeout = match env.get_non_empty("REQUEST_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { value: raw }),
            },
        };

        Ok(Self {
            api_base_url,
            storage_database_url,
            request_timeout,
        })
    }

    pub fn new(api_base_url: &str, storage_database_url: &str, request_timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            storage_database_url: storage_database_url.to_string(),
            request_timeout,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn storage_database_url(&self) -> &str {
        &self.storage_database_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn validate_base_url(url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_defaults_apply_when_environment_is_empty() {
        let settings = ClientSettings::from_provider(&MockEnvironment::empty()).unwrap();

        assert_eq!(settings.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(settings.storage_database_url(), DEFAULT_STORAGE_DATABASE_URL);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let env = MockEnvironment::empty()
            .with_var("API_BASE_URL", "https://assets.example.edu/api")
            .with_var("STORAGE_DATABASE_URL", "sqlite::memory:")
            .with_var("REQUEST_TIMEOUT_SECS", "5");

        let settings = ClientSettings::from_provider(&env).unwrap();

        assert_eq!(settings.api_base_url(), "https://assets.example.edu/api");
        assert_eq!(settings.storage_database_url(), "sqlite::memory:");
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let env = MockEnvironment::empty().with_var("API_BASE_URL", "ftp://assets.example.edu");

        assert!(matches!(
            ClientSettings::from_provider(&env),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_or_garbage_timeout() {
        for raw in ["0", "soon", "-3"] {
            let env = MockEnvironment::empty().with_var("REQUEST_TIMEOUT_SECS", raw);
            assert_eq!(
                ClientSettings::from_provider(&env),
                Err(ConfigError::InvalidTimeout { value: raw.to_string() })
            );
        }
    }

    #[test]
    fn test_rejects_non_sqlite_storage() {
        let env = MockEnvironment::empty()
            .with_var("STORAGE_DATABASE_URL", "postgres://localhost/portal");

        assert!(matches!(
            ClientSettings::from_provider(&env),
            Err(ConfigError::InvalidSetting { .. })
        ));
    }
}
