use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;

use interfaces_github_graphql::index::GITHUB_GRAPHQL_URL;
use thiserror::Error;

const DEFAULT_EXCLUDED_LANGUAGES: &str = "TeX,HTML";
const DEFAULT_TOP_LANGUAGES: usize = 6;
const DEFAULT_OUTPUT_DIR: &str = "cards";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOptions {
    pub exclude: HashSet<String>,
    pub top_n: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub username: String,
    pub api_url: String,
    pub languages: LanguageOptions,
    pub output_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LoadDotEnv: {source}")]
    LoadDotEnv {
        source: dotenvy::Error,
    },

    #[error("{name} not found in environment variables")]
    MissingVariable {
        name: &'static str,
    },

    #[error("InvalidTopLanguages: {value}")]
    InvalidTopLanguages {
        value: String,
    },

    #[error("InvalidBindAddr: {source}")]
    InvalidBindAddr {
        source: std::net::AddrParseError,
    },
}

impl Config {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(source) => return Err(ConfigError::LoadDotEnv { source }),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVariable { name })
        };

        let token = required("GH_TOKEN")?;
        let username = required("GH_USERNAME")?;
        let api_url = lookup("GH_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| GITHUB_GRAPHQL_URL.to_string());

        let exclude = lookup("GH_EXCLUDE_LANGUAGES")
            .unwrap_or_else(|| DEFAULT_EXCLUDED_LANGUAGES.to_string())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        let top_n = match lookup("GH_TOP_LANGUAGES") {
            None => DEFAULT_TOP_LANGUAGES,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(top_n) if top_n > 0 => top_n,
                _ => return Err(ConfigError::InvalidTopLanguages { value }),
            },
        };

        let output_dir = lookup("CARDS_OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        let bind_addr = lookup("CARDS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr { source })?;

        Ok(Self {
            token,
            username,
            api_url,
            languages: LanguageOptions { exclude, top_n },
            output_dir: PathBuf::from(output_dir),
            bind_addr,
        })
    }
}
