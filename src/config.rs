//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use log::warn;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://english_app.db?mode=rwc";
const DEFAULT_SECRET_KEY: &str = "your-super-secret-key-here";

#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub secret_key: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    /// Upper bound for any requested exercise size.
    pub max_exercise_count: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret_key", &"***")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("max_exercise_count", &self.max_exercise_count)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            max_exercise_count: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let secret_key = match lookup("SECRET_KEY") {
            Some(key) if !key.is_empty() => key,
            _ => {
                warn!("SECRET_KEY is not set, using the development secret");
                defaults.secret_key
            }
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            secret_key,
            token_ttl_hours: parse_or(&lookup, "TOKEN_TTL_HOURS", defaults.token_ttl_hours)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
            max_exercise_count: parse_or(
                &lookup,
                "MAX_EXERCISE_COUNT",
                defaults.max_exercise_count,
            )?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.max_exercise_count, 100);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("SECRET_KEY", "s3cret"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn bad_number_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn debug_masks_secret() {
        let config = Config::from_lookup(lookup_from(&[("SECRET_KEY", "s3cret")])).unwrap();
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
