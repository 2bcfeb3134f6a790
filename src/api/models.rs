use serde::{Deserialize, Serialize};

use super::convert::string_or_null;
use crate::error::ConversionError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SslBundle {
    #[serde(rename = "intermediatecertificate", default, deserialize_with = "string_or_null")]
    pub intermediate_certificate: String,
    #[serde(rename = "certificatechain", default, deserialize_with = "string_or_null")]
    pub certificate_chain: String,
    #[serde(rename = "publickey", default, deserialize_with = "string_or_null")]
    pub public_key: String,
    #[serde(rename = "privatekey", default, deserialize_with = "string_or_null")]
    pub private_key: String,
}

/// Default prices for one TLD, as decimal strings straight from the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default, deserialize_with = "string_or_null")]
    pub registration: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub renewal: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub transfer: String,
    #[serde(default)]
    pub special_type: Option<String>,
}

/// Parsed amounts of a [`Pricing`] entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceAmounts {
    pub registration: f64,
    pub renewal: f64,
    pub transfer: f64,
}

impl Pricing {
    pub fn amounts(&self) -> Result<PriceAmounts, ConversionError> {
        Ok(PriceAmounts {
            registration: parse_price("registration", &self.registration)?,
            renewal: parse_price("renewal", &self.renewal)?,
            transfer: parse_price("transfer", &self.transfer)?,
        })
    }
}

/// Parses a wire price such as `"1,234.50"`.
///
/// Only plain decimals are accepted: ASCII digits with an optional fraction,
/// and commas solely as thousands separators.
pub fn parse_price(field: &'static str, literal: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::new(field, literal, "a decimal amount");
    if !is_decimal_amount(literal) {
        return Err(invalid());
    }
    literal.replace(',', "").parse().map_err(|_| invalid())
}

fn is_decimal_amount(literal: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let (whole, fraction) = match literal.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (literal, None),
    };
    if fraction.is_some_and(|f| !digits(f)) {
        return false;
    }

    let mut groups = whole.split(',');
    let lead = groups.next().unwrap_or_default();
    if !digits(lead) {
        return false;
    }
    let mut grouped = false;
    for group in groups {
        grouped = true;
        if group.len() != 3 || !digits(group) {
            return false;
        }
    }
    !grouped || lead.len() <= 3
}

#[derive(Debug, Serialize)]
pub(crate) struct StartRequest {
    pub start: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameServersRequest<'a> {
    pub ns: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct PingResponse {
    #[serde(rename = "yourIp", default, deserialize_with = "string_or_null")]
    pub your_ip: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameServersResponse {
    #[serde(default)]
    pub ns: Vec<String>,
}
