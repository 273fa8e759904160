use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use crate::RegformError;

pub const DEFAULT_ENDPOINT: &str =
    "https://webapis.bloomtechdev.com/registration";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENDPOINT_KEY: &str = "endpoint";
pub const TIMEOUT_KEY: &str = "timeout_secs";

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub settings: HashMap<String, String>,
}

impl EnvironmentConfig {
    pub fn new(settings: HashMap<String, String>) -> EnvironmentConfig {
        EnvironmentConfig { settings }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.settings.insert(key, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn endpoint(&self) -> Result<Url, RegformError> {
        let endpoint = self
            .get(ENDPOINT_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ENDPOINT);
        let url = Url::parse(endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(RegformError::ConfigError(format!(
                "Unsupported scheme for endpoint: {}",
                scheme
            ))),
        }
    }

    pub fn timeout(&self) -> Result<Duration, RegformError> {
        match self.get(TIMEOUT_KEY) {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    RegformError::ConfigError(format!(
                        "Invalid {}: {}",
                        TIMEOUT_KEY, secs
                    ))
                }),
            None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(key: &str, value: &str) -> EnvironmentConfig {
        let mut config = EnvironmentConfig::default();
        config.set(key.to_string(), value.to_string());
        config
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.endpoint().unwrap().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_endpoint_override() {
        let config = config_with(ENDPOINT_KEY, "http://localhost:9000/register");
        let url = config.endpoint().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(9000));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            config_with(ENDPOINT_KEY, "not a url").endpoint(),
            Err(RegformError::Parse(_))
        ));
        assert!(matches!(
            config_with(ENDPOINT_KEY, "ftp://example.com/").endpoint(),
            Err(RegformError::ConfigError(_))
        ));
    }

    #[test]
    fn test_timeout() {
        let config = config_with(TIMEOUT_KEY, " 5 ");
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(5));
        assert!(config_with(TIMEOUT_KEY, "five").timeout().is_err());
    }
}
