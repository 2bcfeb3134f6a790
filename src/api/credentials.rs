use std::fmt;

use serde::Serialize;

/// API key pair sent with every authenticated request.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    api_key: String,
    #[serde(rename = "secretapikey")]
    secret_api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    /// Copies the key pair onto an outgoing payload.
    pub(crate) fn stamp<B: Authenticated>(&self, target: &mut B) {
        target.set_api_key(&self.api_key);
        target.set_secret_api_key(&self.secret_api_key);
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

/// A request payload that can carry the key pair.
///
/// The transport stamps both keys onto the payload right before encoding it,
/// so it never needs to know the payload's concrete shape.
pub trait Authenticated {
    fn set_api_key(&mut self, api_key: &str);
    fn set_secret_api_key(&mut self, secret_api_key: &str);
}

impl Authenticated for Credentials {
    fn set_api_key(&mut self, api_key: &str) {
        self.api_key = api_key.to_string();
    }

    fn set_secret_api_key(&mut self, secret_api_key: &str) {
        self.secret_api_key = secret_api_key.to_string();
    }
}

/// Any serializable payload with the key pair flattened beside its fields.
#[derive(Debug, Clone, Serialize)]
pub struct Authed<T> {
    #[serde(flatten)]
    credentials: Credentials,
    #[serde(flatten)]
    payload: T,
}

impl<T> Authed<T> {
    pub fn new(payload: T) -> Self {
        Self {
            credentials: Credentials::default(),
            payload,
        }
    }
}

impl<T> Authenticated for Authed<T> {
    fn set_api_key(&mut self, api_key: &str) {
        self.credentials.set_api_key(api_key);
    }

    fn set_secret_api_key(&mut self, secret_api_key: &str) {
        self.credentials.set_secret_api_key(secret_api_key);
    }
}
