//! Error types for fasli-net.

use fasli_solar::{GeoError, SunriseError};

/// Transport and decoding failures of the HTTP clients.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetError {
    /// The request could not be sent or timed out.
    #[error("request failed: {reason}")]
    Request {
        /// Description of the transport failure.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected JSON document.
    #[error("cannot decode response: {reason}")]
    Decode {
        /// Description of the decoding failure.
        reason: String,
    },
}

impl From<reqwest::Error> for NetError {
    fn from(e: reqwest::Error) -> Self {
        NetError::Request {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Decode {
            reason: e.to_string(),
        }
    }
}

impl From<NetError> for GeoError {
    fn from(e: NetError) -> Self {
        GeoError::ServiceUnavailable {
            reason: e.to_string(),
        }
    }
}

impl From<NetError> for SunriseError {
    fn from(e: NetError) -> Self {
        SunriseError::TimeServiceUnavailable {
            reason: e.to_string(),
        }
    }
}
