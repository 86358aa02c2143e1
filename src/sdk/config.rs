use std::{env, num::NonZeroU32, time::Duration};
use thiserror::Error;

pub const API_KEY_VAR: &str = "YANDEX_API_KEY";
pub const BASE_URL_VAR: &str = "YANDEX_GEOCODER_URL";
pub const RATE_VAR: &str = "GEOCODER_RATE_PER_SECOND";

pub const DEFAULT_BASE_URL: &str = "https://geocode-maps.yandex.ru";
pub const DEFAULT_RATE_PER_SECOND: u32 = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set (add it to the environment or a .env file)")]
    MissingVar(&'static str),

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Settings for the geocoding client. The API key always comes from the
/// caller; nothing is compiled in.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    pub api_key: String,
    pub base_url: String,
    pub rate_per_second: NonZeroU32,
    pub timeout: Duration,
}

impl GeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_per_second: NonZeroU32::new(DEFAULT_RATE_PER_SECOND).unwrap_or(NonZeroU32::MIN),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads `YANDEX_API_KEY` (required), `YANDEX_GEOCODER_URL` and
    /// `GEOCODER_RATE_PER_SECOND` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(BASE_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(RATE_VAR) {
            config.rate_per_second = raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: RATE_VAR,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let err = GeocoderConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(API_KEY_VAR));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let err = GeocoderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(API_KEY_VAR));
    }

    #[test]
    fn test_defaults() {
        let config = GeocoderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.rate_per_second.get(), DEFAULT_RATE_PER_SECOND);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_overrides() {
        let config = GeocoderConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:8080/"),
            (RATE_VAR, "2"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.rate_per_second.get(), 2);
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let err = GeocoderConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "k"), (RATE_VAR, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: RATE_VAR, .. }));
    }
}
