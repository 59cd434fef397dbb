use std::env;
use std::path::PathBuf;

use crate::errors::LoaderError;

/// Bundled seed data, resolved against the function's working directory.
pub const DATA_FILE: &str = "MOCK_DATA.json";

pub const DEFAULT_MAX_CONCURRENT_BATCHES: usize = 10;

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub table_name: String,
    pub region: Option<String>,
    pub data_file: PathBuf,
    pub max_concurrent_batches: usize,
}

impl LoaderConfig {
    /// # Errors
    ///
    /// Returns an error if the table name is missing or a numeric setting does not parse.
    pub fn from_env() -> Result<Self, LoaderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so callers (and tests)
    /// don't have to mutate the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`LoaderConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoaderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("USER_EXISTING_ACCOUNTS_TABLE")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                LoaderError::ConfigError("USER_EXISTING_ACCOUNTS_TABLE is not set".to_string())
            })?;

        let max_concurrent_batches = match lookup("MAX_CONCURRENT_BATCHES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(LoaderError::ConfigError(format!(
                        "MAX_CONCURRENT_BATCHES must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => DEFAULT_MAX_CONCURRENT_BATCHES,
        };

        Ok(Self {
            table_name,
            region: lookup("AWS_REGION").filter(|v| !v.is_empty()),
            data_file: PathBuf::from(DATA_FILE),
            max_concurrent_batches,
        })
    }
}
