use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};
use validator::{Validate, ValidationError};

pub const API_KEY_PREFIX: &str = "pk1_";
pub const SECRET_API_KEY_PREFIX: &str = "sk1_";

#[derive(Serialize, Deserialize, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(custom(function = "validate_api_key"))]
    pub api_key: Cow<'static, str>,

    #[serde(default)]
    #[validate(custom(function = "validate_secret_api_key"))]
    pub secret_api_key: Cow<'static, str>,

    /// Use the dedicated IPv4 host instead of porkbun.com.
    #[serde(default)]
    pub force_ipv4: bool,

    #[serde(default = "default_request_timeout")]
    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    pub request_timeout_secs: u64,

    /// TLDs whose default prices are reported.
    #[serde(default)]
    pub pricing_tlds: Vec<Cow<'static, str>>,
}

fn default_request_timeout() -> u64 {
    30
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"<redacted>")
            .field("force_ipv4", &self.force_ipv4)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("pricing_tlds", &self.pricing_tlds)
            .finish()
    }
}

/// `prefix` followed by 64 lowercase hexadecimal digits.
pub fn is_key(value: &str, prefix: &str) -> bool {
    value.strip_prefix(prefix).is_some_and(|hex| {
        hex.len() == 64 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    })
}

fn key_error(code: &'static str, prefix: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(format!(
        "must consist of '{}' prefix followed by a 64 digit lowercase hexadecimal number",
        prefix
    )));
    error
}

fn validate_api_key(value: &str) -> Result<(), ValidationError> {
    if is_key(value, API_KEY_PREFIX) {
        Ok(())
    } else {
        Err(key_error("api_key", API_KEY_PREFIX))
    }
}

fn validate_secret_api_key(value: &str) -> Result<(), ValidationError> {
    if is_key(value, SECRET_API_KEY_PREFIX) {
        Ok(())
    } else {
        Err(key_error("secret_api_key", SECRET_API_KEY_PREFIX))
    }
}
