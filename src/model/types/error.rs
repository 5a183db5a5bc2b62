use http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Error reaching the api: {0}")]
    Network(String),
    #[error("The api answered with {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("Error from serde decode: {0}")]
    Decode(String),
}

impl Error {
    /// The message the server put in the error body, if it sent a usable one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Status {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}

/// Error payload of the api, `{"detail": ...}`.
///
/// Request validation errors put a list of problems in `detail`, only a plain
/// string is shown to the user.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}

impl From<gloo::net::Error> for Error {
    fn from(e: gloo::net::Error) -> Self {
        match e {
            gloo::net::Error::SerdeError(e) => Error::Decode(e.to_string()),
            e => Error::Network(e.to_string()),
        }
    }
}
