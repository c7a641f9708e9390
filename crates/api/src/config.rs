use axum::http::HeaderValue;

/// Application title, reported by the landing route.
pub const APP_TITLE: &str = "Palette Picker";

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Where projects and palettes are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local tables, lost on restart.
    Memory,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageBackend,
    /// Replace all rows with the development fixture at startup.
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `APP_ENV`                  | `development`            |
    /// | `HOST`                     | `0.0.0.0`                |
    /// | `PORT`                     | `3000`                   |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                     |
    /// | `STORAGE_BACKEND`          | `postgres`               |
    /// | `DATABASE_URL`             | required for `postgres`  |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                     |
    /// | `SEED_ON_STARTUP`          | `false`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let environment = match var("APP_ENV", "development").as_str() {
            "development" => Environment::Development,
            "test" => Environment::Test,
            "production" => Environment::Production,
            other => {
                return Err(ConfigError::Invalid {
                    var: "APP_ENV",
                    expected: "one of development, test, production",
                    value: other.to_string(),
                })
            }
        };

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", &var("PORT", "3000"), "a valid port number")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let storage = match var("STORAGE_BACKEND", "postgres").as_str() {
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_var(
                    "DATABASE_MAX_CONNECTIONS",
                    &var("DATABASE_MAX_CONNECTIONS", "20"),
                    "a positive integer",
                )?,
            },
            "memory" => StorageBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    var: "STORAGE_BACKEND",
                    expected: "postgres or memory",
                    value: other.to_string(),
                })
            }
        };

        let seed_on_startup = parse_var(
            "SEED_ON_STARTUP",
            &var("SEED_ON_STARTUP", "false"),
            "true or false",
        )?;

        Ok(Self {
            environment,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            seed_on_startup,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}
