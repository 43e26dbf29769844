/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * listen port, PostgreSQL connection settings and JWT settings.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables. `dotenv` is applied
 * first, so a `.env` file in the working directory fills in any variable
 * that is not already set. Every key has a default suitable for local
 * development.
 *
 * | Variable                | Default              |
 * |-------------------------|----------------------|
 * | `PORT`                  | `3000`               |
 * | `DATABASE_URL`          | built from `DB_*`    |
 * | `DB_HOST`               | `localhost`          |
 * | `DB_PORT`               | `5432`               |
 * | `DB_USER`               | `postgres`           |
 * | `DB_PASSWORD`           | `postgres`           |
 * | `DB_NAME`               | `project_management` |
 * | `JWT_SECRET`            | `secret`             |
 * | `JWT_EXPIRED`           | `1h`                 |
 * | `JWT_EXPIREY_MINUTES`   | `6000`               |
 * | `REFRESH_TOKEN_EXPIRED` | `24h`                |
 *
 * # Error Handling
 *
 * Malformed values (a non-numeric port, an unparsable duration) are
 * reported as `ConfigError` instead of being silently replaced.
 */

use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// A duration string such as `1h30m` cannot be parsed
    #[error("invalid duration for {key}: '{value}'")]
    InvalidDuration {
        /// Environment variable name
        key: &'static str,
        /// Raw value found in the environment
        value: String,
    },
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Full connection URL; wins over the individual fields when set
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Connection URL handed to the pool
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "project_management".to_string(),
            url: None,
            max_connections: 100,
            min_connections: 10,
            max_lifetime: Duration::from_secs(60 * 60),
        }
    }
}

/// JWT signing settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of an access token
    pub expires_in: Duration,
    /// Legacy minute-based expiry, kept for clients that read it
    pub expiry_minutes: u64,
    /// Lifetime of a refresh token
    pub refresh_expires_in: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "secret".to_string(),
            expires_in: Duration::from_secs(60 * 60),
            expiry_minutes: 6000,
            refresh_expires_in: Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_process_env()
    }

    /// Load configuration from the process environment only
    pub fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        let port = parse_number("PORT", lookup("PORT"), defaults.port)?;

        let database = DatabaseConfig {
            host: get("DB_HOST", defaults.database.host),
            port: parse_number("DB_PORT", lookup("DB_PORT"), defaults.database.port)?,
            user: get("DB_USER", defaults.database.user),
            password: get("DB_PASSWORD", defaults.database.password),
            name: get("DB_NAME", defaults.database.name),
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            ..defaults.database
        };

        let jwt = JwtConfig {
            secret: get("JWT_SECRET", defaults.jwt.secret),
            expires_in: parse_duration_var(
                "JWT_EXPIRED",
                lookup("JWT_EXPIRED"),
                defaults.jwt.expires_in,
            )?,
            expiry_minutes: parse_number(
                "JWT_EXPIREY_MINUTES",
                lookup("JWT_EXPIREY_MINUTES"),
                defaults.jwt.expiry_minutes,
            )?,
            refresh_expires_in: parse_duration_var(
                "REFRESH_TOKEN_EXPIRED",
                lookup("REFRESH_TOKEN_EXPIRED"),
                defaults.jwt.refresh_expires_in,
            )?,
        };

        Ok(Self { port, database, jwt })
    }
}

/// Apply `.env` to the process environment; variables already set win
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    fallback: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(fallback),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_duration_var(
    key: &'static str,
    raw: Option<String>,
    fallback: Duration,
) -> Result<Duration, ConfigError> {
    match raw {
        None => Ok(fallback),
        Some(value) => parse_duration(&value).ok_or(ConfigError::InvalidDuration { key, value }),
    }
}

/// Parse a duration such as `1h`, `90s`, `1h30m` or `250ms`.
///
/// Units are `h`, `m`, `s` and `ms`, case-insensitive. Fractions are
/// allowed (`1.5h`). A bare `0` is accepted.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let lower = input.trim().to_ascii_lowercase();
    if lower == "0" {
        return Some(Duration::ZERO);
    }
    if lower.is_empty() {
        return None;
    }

    let mut rest = lower.as_str();
    let mut total_secs = 0f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return None;
        }
        let value: f64 = rest[..number_len].parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit_secs = match &rest[..unit_len] {
            "h" => 3600.0,
            "m" => 60.0,
            "s" => 1.0,
            "ms" => 0.001,
            _ => return None,
        };
        rest = &rest[unit_len..];
        total_secs += value * unit_secs;
    }

    Duration::try_from_secs_f64(total_secs).ok()
}
