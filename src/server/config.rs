use crate::server::error::config::ConfigError;

/// Password used for the admin master account and new users when none is configured.
pub const DEFAULT_PASSWORD: &str = "123";

pub const DEFAULT_HOST: &str = "localhost";

pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    /// Sessions are kept in memory when no Valkey/Redis URL is configured
    pub valkey_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub admin_master_password: String,
    pub default_user_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, unset or empty values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match var("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            valkey_url: var("VALKEY_URL"),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            admin_master_password: var("ADMIN_MASTER_PASSWORD")
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            default_user_password: var("DEFAULT_USER_PASSWORD")
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
