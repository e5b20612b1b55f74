//! Error types for message reads and request construction.

use std::io;

use http::Version;
use http::header::{HeaderName, ToStrError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("invalid value for header {name}: {source}")]
    InvalidHeaderValue { name: HeaderName, source: ToStrError },

    #[error("unsupported http version: {0:?}")]
    UnsupportedVersion(Version),

    #[error("invalid content-type header: {source}")]
    InvalidContentType { source: ToStrError },

    #[error("body error: {source}")]
    Body {
        #[from]
        source: BodyError,
    },

    #[error("invalid request: {source}")]
    InvalidRequest {
        #[from]
        source: http::Error,
    },
}

impl InspectError {
    pub fn invalid_header_value(name: &HeaderName, source: ToStrError) -> Self {
        Self::InvalidHeaderValue { name: name.clone(), source }
    }

    pub fn invalid_content_type(source: ToStrError) -> Self {
        Self::InvalidContentType { source }
    }
}

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body is not ready to be read without blocking")]
    Pending,

    #[error("body stream error: {reason}")]
    Stream { reason: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl BodyError {
    pub fn stream<S: ToString>(str: S) -> Self {
        Self::Stream { reason: str.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
