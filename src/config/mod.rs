pub mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{borrow::Cow, fs};
use validator::Validate;

pub const API_KEY_ENV: &str = "PORKBUN_API_KEY";
pub const SECRET_API_KEY_ENV: &str = "PORKBUN_SECRET_API_KEY";

/// Reads, completes and validates the YAML config at `path`.
///
/// Keys left empty in the file are taken from `PORKBUN_API_KEY` and
/// `PORKBUN_SECRET_API_KEY`.
pub fn load(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    parse(&contents, |name| std::env::var(name).ok())
        .with_context(|| format!("Failed to load config file: {}", path))
}

pub fn parse(contents: &str, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let mut config: Config = serde_yaml::from_str(contents).context("Failed to parse config")?;

    if config.api_key.is_empty() {
        if let Some(key) = env(API_KEY_ENV) {
            config.api_key = Cow::Owned(key);
        }
    }
    if config.secret_api_key.is_empty() {
        if let Some(key) = env(SECRET_API_KEY_ENV) {
            config.secret_api_key = Cow::Owned(key);
        }
    }

    config.validate().context("Invalid config")?;
    Ok(config)
}
