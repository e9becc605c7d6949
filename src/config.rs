// src/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use crate::domain::DueDateBasis;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("{0}")]
    InvalidDueDateBasis(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Auctions loaded into the repository at startup.
    pub auctions_file: Option<PathBuf>,
    /// Rewritten with every persisted payment after each run.
    pub payments_file: Option<PathBuf>,
    pub due_date_basis: DueDateBasis,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            auctions_file: None,
            payments_file: None,
            due_date_basis: DueDateBasis::ClosingDate,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(port) = lookup("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        config.auctions_file = lookup("AUCTIONS_FILE").map(PathBuf::from);
        config.payments_file = lookup("PAYMENTS_FILE").map(PathBuf::from);
        if let Some(basis) = lookup("DUE_DATE_BASIS") {
            config.due_date_basis = DueDateBasis::from_str(&basis)
                .map_err(ConfigError::InvalidDueDateBasis)?;
        }

        Ok(config)
    }
}
