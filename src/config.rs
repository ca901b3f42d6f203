// src/config.rs

use std::{env, fmt};

use dotenvy::dotenv;

/// Default number of rows returned by the leaderboard when no `limit` is given.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Largest leaderboard a single request may ask for.
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub leaderboard_limit: usize,
}

/// Raised when the environment is missing a required variable or holds an unparsable one.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let leaderboard_limit = parse_or("LEADERBOARD_LIMIT", DEFAULT_LEADERBOARD_LIMIT)?;
        check_leaderboard_limit(leaderboard_limit)?;

        Ok(Self {
            database_url,
            rust_log,
            port: parse_or("PORT", 3000)?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            leaderboard_limit,
        })
    }
}

/// The configured default must lie in the same 1..=100 range as a request's `limit`.
pub fn check_leaderboard_limit(limit: usize) -> Result<(), ConfigError> {
    if (1..=MAX_LEADERBOARD_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key: "LEADERBOARD_LIMIT",
            value: limit.to_string(),
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
