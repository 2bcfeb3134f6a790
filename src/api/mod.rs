pub mod client;
pub(crate) mod convert;
pub mod credentials;
pub mod dns_record;
pub mod domain;
pub mod models;
pub mod porkbun;
pub mod status;
pub mod url_forward;

pub use client::{Batch, RegistrarApi, DOMAIN_PAGE_SIZE};
pub use credentials::{Authed, Authenticated, Credentials};
pub use dns_record::{DnsRecord, DnsRecordQuery};
pub use domain::Domain;
pub use models::{parse_price, PriceAmounts, Pricing, SslBundle};
pub use porkbun::{decode_envelope, PorkbunClient};
pub use status::{ResponseStatus, StatusEnvelope};
pub use url_forward::UrlForward;
