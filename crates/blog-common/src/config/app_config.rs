//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "blog-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_access_token_expiry() -> i64 {
    900 // 15 minutes
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    Some(raw) => Environment::parse(&raw)
                        .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
                    None => Environment::default(),
                },
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var(&lookup, "DATABASE_RUN_MIGRATIONS")?.unwrap_or(false),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                access_token_expiry: parse_var(&lookup, "JWT_ACCESS_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_access_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig {
                worker_id: parse_var(&lookup, "WORKER_ID")?.unwrap_or(0),
            },
        })
    }
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
