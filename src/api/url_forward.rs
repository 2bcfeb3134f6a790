use serde::{Deserialize, Serialize};

use super::convert::{string_or_null, FlagEncoding, WireLiteral};
use crate::error::ConversionError;

/// A URL forward configured on a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlForward {
    pub id: Option<i64>,
    pub subdomain: String,
    pub location: String,
    pub forward_type: String,
    pub include_path: bool,
    pub wildcard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireUrlForward {
    #[serde(default, skip_serializing_if = "WireLiteral::is_empty")]
    pub id: WireLiteral,
    #[serde(default, deserialize_with = "string_or_null")]
    pub subdomain: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub location: String,
    #[serde(rename = "type", default, deserialize_with = "string_or_null")]
    pub forward_type: String,
    #[serde(default)]
    pub include_path: WireLiteral,
    #[serde(default)]
    pub wildcard: WireLiteral,
}

impl From<&UrlForward> for WireUrlForward {
    fn from(forward: &UrlForward) -> Self {
        WireUrlForward {
            id: WireLiteral::optional_from(forward.id),
            subdomain: forward.subdomain.clone(),
            location: forward.location.clone(),
            forward_type: forward.forward_type.clone(),
            include_path: WireLiteral::from(FlagEncoding::YesNo.encode(forward.include_path)),
            wildcard: WireLiteral::from(FlagEncoding::YesNo.encode(forward.wildcard)),
        }
    }
}

impl TryFrom<&WireUrlForward> for UrlForward {
    type Error = ConversionError;

    fn try_from(wire: &WireUrlForward) -> Result<Self, Self::Error> {
        Ok(UrlForward {
            id: wire.id.optional("id")?,
            subdomain: wire.subdomain.clone(),
            location: wire.location.clone(),
            forward_type: wire.forward_type.clone(),
            include_path: FlagEncoding::YesNo.decode("include path", wire.include_path.as_str())?,
            wildcard: FlagEncoding::YesNo.decode("wildcard", wire.wildcard.as_str())?,
        })
    }
}
