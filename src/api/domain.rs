use serde::Deserialize;

use super::convert::{string_or_null, FlagEncoding, WireLiteral};
use crate::error::ConversionError;

/// A domain registered in the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub domain: String,
    pub status: String,
    pub tld: String,
    pub create_date: String,
    pub expire_date: String,
    pub security_lock: bool,
    pub whois_privacy: bool,
    pub auto_renew: bool,
    pub not_local: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireDomain {
    #[serde(default, deserialize_with = "string_or_null")]
    pub domain: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub status: String,
    #[serde(rename = "TLD", default, deserialize_with = "string_or_null")]
    pub tld: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub create_date: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub expire_date: String,
    #[serde(default)]
    pub security_lock: WireLiteral,
    #[serde(default)]
    pub not_local: WireLiteral,
}

impl TryFrom<&WireDomain> for Domain {
    type Error = ConversionError;

    fn try_from(wire: &WireDomain) -> Result<Self, Self::Error> {
        let flag = |field, literal: &WireLiteral| FlagEncoding::Binary.decode(field, literal.as_str());

        // whois_privacy and auto_renew are read from notLocal, as in the released provider.
        // TODO: check against the live API whether whoisPrivacy/autoRenew should be used instead.
        Ok(Domain {
            domain: wire.domain.clone(),
            status: wire.status.clone(),
            tld: wire.tld.clone(),
            create_date: wire.create_date.clone(),
            expire_date: wire.expire_date.clone(),
            security_lock: flag("security lock", &wire.security_lock)?,
            whois_privacy: flag("whois privacy", &wire.not_local)?,
            auto_renew: flag("auto renew", &wire.not_local)?,
            not_local: flag("not local", &wire.not_local)?,
        })
    }
}
