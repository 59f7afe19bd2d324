use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_DB_PATH: &str = "trans.db";
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SOURCE_LANGUAGE: &str = "English";

/// Runtime configuration loaded from environment variables.
///
/// | Env Var                    | Default                                              |
/// |----------------------------|------------------------------------------------------|
/// | `LINGO_DB_PATH`            | `trans.db`                                           |
/// | `LINGO_TRANSLATE_ENDPOINT` | `https://translate.googleapis.com/translate_a/single`|
/// | `LINGO_HTTP_TIMEOUT_SECS`  | `60`                                                 |
/// | `LINGO_SOURCE_LANGUAGE`    | `English`                                            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Label written into every record as its source language.
    pub source_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs: u64 = match get("LINGO_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "LINGO_HTTP_TIMEOUT_SECS",
                expected: "u64",
                value: raw.clone(),
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            db_path: get("LINGO_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            endpoint: get("LINGO_TRANSLATE_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs,
            source_language: get("LINGO_SOURCE_LANGUAGE").unwrap_or(defaults.source_language),
        })
    }
}
