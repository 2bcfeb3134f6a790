use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by every registrar API operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a usable response body.
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: TransportCause,
    },

    /// The API answered with an `ERROR` status. Displays the server message as-is.
    #[error("{message}")]
    Api { message: String },

    #[error("received unknown response status, expected 'SUCCESS' or 'ERROR', got '{got}'")]
    UnexpectedStatus { got: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("request cancelled by caller")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum TransportCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn transport(context: &'static str, cause: impl Into<TransportCause>) -> Self {
        Self::Transport {
            context,
            source: cause.into(),
        }
    }
}

/// A wire value outside the finite set of literals its field allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {field} of {expected}, got '{literal}'")]
pub struct ConversionError {
    pub field: &'static str,
    pub literal: String,
    pub expected: &'static str,
}

impl ConversionError {
    pub(crate) fn new(field: &'static str, literal: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field,
            literal: literal.into(),
            expected,
        }
    }
}
