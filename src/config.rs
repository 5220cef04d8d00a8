use axum::http::HeaderValue;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16 number, got {0:?}")]
    InvalidPort(String),

    #[error("STORE must be `postgres` or `memory`, got {0:?}")]
    InvalidStore(String),

    #[error("DATABASE_URL missing, it is required when STORE=postgres")]
    MissingDatabaseUrl,

    #[error("CORS_ORIGIN is not a valid header value: {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv().is_ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests never touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let store = match lookup("STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::InvalidStore(other.to_string())),
        };

        let cors_origin = lookup("CORS_ORIGIN")
            .map(|raw| HeaderValue::from_str(&raw).map_err(|_| ConfigError::InvalidOrigin(raw)))
            .transpose()?;

        Ok(Self {
            host,
            port,
            store,
            cors_origin,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")])).unwrap();

        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(
            config.store,
            StoreKind::Postgres {
                database_url: "postgres://db".to_string()
            }
        );
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_memory_store_needs_no_database_url() {
        let config = Config::from_lookup(lookup(&[
            ("STORE", "memory"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "https://example.com"),
        ]))
        .unwrap();

        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin.unwrap(), "https://example.com");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::MissingDatabaseUrl)
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("STORE", "memory"), ("PORT", "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("STORE", "mongo")])),
            Err(ConfigError::InvalidStore(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("STORE", "memory"), ("CORS_ORIGIN", "bad\norigin")])),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }
}
