use std::fmt::Display;

use thiserror::Error;

use crate::data::codec::JsonPath;

/// Failure to map a JSON value onto one of the App Store Server API shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required field is absent, or a field holds the wrong primitive type.
    /// Always fatal for the shape being decoded.
    #[error("schema mismatch at `{path}`: {reason}")]
    SchemaMismatch { path: String, reason: MismatchReason },

    /// A value is not a member of its closed enumeration. Inbound shapes
    /// never surface this; they keep the raw code instead.
    #[error("unknown {enumeration} enumerant `{value}` at `{path}`")]
    UnknownEnumerant {
        enumeration: &'static str,
        value: String,
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MismatchReason {
    #[error("required field is missing")]
    Missing,
    #[error("required field is null")]
    Null,
    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{value} is out of range for {expected}")]
    OutOfRange {
        expected: &'static str,
        value: String,
    },
    #[error("not valid JSON: {0}")]
    InvalidJson(String),
    #[error("could not be serialized: {0}")]
    Unserializable(String),
}

impl ModelError {
    pub(crate) fn mismatch(path: &JsonPath<'_>, reason: MismatchReason) -> Self {
        Self::SchemaMismatch {
            path: path.to_string(),
            reason,
        }
    }

    pub(crate) fn unknown_enumerant(
        enumeration: &'static str,
        value: impl Display,
        path: &JsonPath<'_>,
    ) -> Self {
        Self::UnknownEnumerant {
            enumeration,
            value: value.to_string(),
            path: path.to_string(),
        }
    }

    /// Field path the error refers to, e.g. `data[0].lastTransactions[1].status`.
    pub fn path(&self) -> &str {
        match self {
            Self::SchemaMismatch { path, .. } | Self::UnknownEnumerant { path, .. } => path,
        }
    }
}

/// Failure to inspect or verify a compact-serialized JSON Web Signature.
#[derive(Debug, Error)]
pub enum JwsError {
    #[error("malformed JWS: {0}")]
    Malformed(&'static str),

    #[error("JWS {segment} segment is not valid base64url")]
    Base64 {
        segment: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Raised by [`JwsVerifier`](crate::data::jws::JwsVerifier)
    /// implementations when the signature or certificate chain is rejected.
    #[error("JWS verification failed: {0}")]
    Verification(String),
}
