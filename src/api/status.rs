use serde::Deserialize;

use super::convert::string_or_null;
use crate::error::{Error, Result};

/// The `status` literal carried by every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    Error,
    Unknown(String),
}

impl From<&str> for ResponseStatus {
    fn from(value: &str) -> Self {
        match value {
            "SUCCESS" => ResponseStatus::Success,
            "ERROR" => ResponseStatus::Error,
            other => ResponseStatus::Unknown(other.to_string()),
        }
    }
}

/// The `{status, message}` pair wrapping every API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub message: String,
}

impl StatusEnvelope {
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::from(self.status.as_str())
    }

    /// Passes a `SUCCESS` envelope through and turns anything else into the matching error.
    pub fn check(self) -> Result<Self> {
        match self.status() {
            ResponseStatus::Success => Ok(self),
            ResponseStatus::Error => Err(Error::Api {
                message: self.message,
            }),
            ResponseStatus::Unknown(got) => Err(Error::UnexpectedStatus { got }),
        }
    }
}
