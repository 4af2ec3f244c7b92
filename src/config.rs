use std::env;

use derive_getters::Getters;

use crate::error::ConfigError;

const DB_HOST: &str = "STOCK_DB_HOST";
const DB_PORT: &str = "STOCK_DB_PORT";
const DB_USER: &str = "STOCK_DB_USER";
const DB_PASSWORD: &str = "STOCK_DB_PASSWORD";
const DB_NAME: &str = "STOCK_DB_NAME";

const DEFAULT_PORT: u16 = 5432;

/// Database connection settings, passed explicitly into the store. Every
/// required field must be non-blank; construction fails fast otherwise.
#[derive(Clone, Debug, Getters)]
pub struct DbConfig {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
}

impl DbConfig {
    pub fn new(
        host: String,
        port: u16,
        username: String,
        password: String,
        database: String,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            host: require(DB_HOST, host)?,
            port,
            username: require(DB_USER, username)?,
            password: require(DB_PASSWORD, password)?,
            database: require(DB_NAME, database)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(DB_PORT) {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidField {
                    field: DB_PORT,
                    value: value.clone(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Self::new(
            env::var(DB_HOST).unwrap_or_default(),
            port,
            env::var(DB_USER).unwrap_or_default(),
            env::var(DB_PASSWORD).unwrap_or_default(),
            env::var(DB_NAME).unwrap_or_default(),
        )
    }

    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?application_name=stock_quote_collector",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

fn require(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::MissingField { field })
    } else {
        Ok(value)
    }
}
