//! Failure taxonomy of the bridge.
//!
//! The split matters more than the messages: `ClusterMismatch` and
//! `UnknownCluster` are caller bugs and fail loudly; `UnsupportedAttribute`
//! and `NotFound` are routine no-value outcomes; decode failures surface to
//! writers but are swallowed (logged only) on the reporting path so one
//! malformed external message cannot take the bridge down with it.

use thiserror::Error;

use crate::data_model::{AttributeId, AttributePath, ClusterId};

#[derive(Debug, Error, PartialEq)]
pub enum BridgeError {
    /// The path names a different cluster than the handler it was given to.
    #[error("path {path} does not belong to cluster {expected:#06x}")]
    ClusterMismatch {
        path: AttributePath,
        expected: ClusterId,
    },

    /// The attribute exists in the schema but this bridge does not
    /// translate it.
    #[error("attribute {attribute:#06x} of cluster {cluster:#06x} is not bridged")]
    UnsupportedAttribute {
        cluster: ClusterId,
        attribute: AttributeId,
    },

    /// No value has been reported for the path yet.
    #[error("no cached value for {0}")]
    NotFound(AttributePath),

    /// No handler is registered for the cluster the path names.
    #[error("no handler registered for cluster {0:#06x}")]
    UnknownCluster(ClusterId),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// External-to-local conversion failure.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A token (or bitmap flag name) with no entry in the dictionary.
    #[error("token {token:?} is not defined for {dictionary}")]
    UnmappedToken {
        dictionary: &'static str,
        token: String,
    },
}

impl DecodeError {
    pub(crate) fn mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        DecodeError::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}

/// Local-to-external conversion failure.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A locally defined value with no external token. The dictionaries
    /// are allowed to be lossy; a missing entry is never papered over with
    /// an invented token.
    #[error("value {value} of {dictionary} has no external token")]
    UnmappedValue {
        dictionary: &'static str,
        value: u64,
    },
}

/// Reported by `Publisher` implementations when a desired-value event
/// cannot be handed to the transport.
#[derive(Debug, Error, PartialEq)]
pub enum PublishError {
    #[error("publication rejected: {0}")]
    Rejected(String),

    #[error("transport unavailable: {0}")]
    Transport(String),
}
