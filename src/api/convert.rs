//! Helpers for the API's loosely typed JSON.
//!
//! Booleans and integers arrive as strings, optional integers use an empty
//! string for "absent", and some fields may be `null`. Everything here fails
//! closed: a literal outside the expected set is a [`ConversionError`].

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConversionError;

/// Literal table for a wire boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagEncoding {
    /// `"1"` / `"0"`, used by the domain listing.
    Binary,
    /// `"yes"` / `"no"`, used by URL forwards.
    YesNo,
}

impl FlagEncoding {
    fn literals(self) -> (&'static str, &'static str) {
        match self {
            FlagEncoding::Binary => ("1", "0"),
            FlagEncoding::YesNo => ("yes", "no"),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            FlagEncoding::Binary => "'1' or '0'",
            FlagEncoding::YesNo => "'yes' or 'no'",
        }
    }

    pub(crate) fn decode(self, field: &'static str, literal: &str) -> Result<bool, ConversionError> {
        let (yes, no) = self.literals();
        if literal == yes {
            Ok(true)
        } else if literal == no {
            Ok(false)
        } else {
            Err(ConversionError::new(field, literal, self.expected()))
        }
    }

    pub(crate) fn encode(self, value: bool) -> &'static str {
        let (yes, no) = self.literals();
        if value {
            yes
        } else {
            no
        }
    }
}

/// A scalar literal exactly as it appeared on the wire.
///
/// Accepts any JSON value so that a field of the wrong JSON type fails the
/// one record it belongs to rather than the whole response. `null` reads as
/// the empty string, floats keep their decimal point, arrays and objects
/// become `[...]` / `{...}`. Always serializes back as a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WireLiteral(String);

impl WireLiteral {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn optional_from(value: Option<i64>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }

    /// Parses a field that must always be present.
    pub(crate) fn required(&self, field: &'static str) -> Result<i64, ConversionError> {
        self.0
            .parse()
            .map_err(|_| ConversionError::new(field, self.0.as_str(), "an integer"))
    }

    /// Parses a field where the empty string means absent.
    pub(crate) fn optional(&self, field: &'static str) -> Result<Option<i64>, ConversionError> {
        if self.0.is_empty() {
            return Ok(None);
        }
        self.required(field).map(Some)
    }
}

impl From<i64> for WireLiteral {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for WireLiteral {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for WireLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WireLiteral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireLiteralVisitor;

        impl<'de> Visitor<'de> for WireLiteralVisitor {
            type Value = WireLiteral;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(WireLiteral(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(WireLiteral(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(WireLiteral(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(WireLiteral(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                // Debug keeps the fraction ("600.0"), so integer parsing rejects it.
                Ok(WireLiteral(format!("{:?}", v)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(WireLiteral(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(WireLiteral("[...]".to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(WireLiteral("{...}".to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireLiteral::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(WireLiteral::default())
            }
        }

        deserializer.deserialize_any(WireLiteralVisitor)
    }
}

/// Deserializes a string field that the API sometimes sends as `null`.
pub(crate) fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
