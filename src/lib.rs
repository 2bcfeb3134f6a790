//! Typed client for the Porkbun registrar JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod inventory;

#[cfg(test)]
mod tests;

pub use api::{
    Batch, DnsRecord, DnsRecordQuery, Domain, PorkbunClient, Pricing, RegistrarApi, SslBundle,
    UrlForward,
};
pub use error::{ConversionError, Error, Result};
