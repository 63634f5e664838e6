//! Error types for the SDK.
//!
//! One crate-level error enum; classification into these kinds happens
//! at the resolver boundary, never deeper.

use crate::xdr::XdrError;
use thiserror::Error;

/// Marker substring upstream contract errors carry for missing records.
const NOT_FOUND_MARKER: &str = "Domain Not Found";

/// Errors surfaced by the SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration, rejected when the resolver is constructed.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// The requested domain or subdomain has no on-chain record.
    ///
    /// Expected, recoverable condition; callers branch on it.
    #[error("domain not found")]
    DomainNotFound,

    /// Transport or contract-execution failure reported by the RPC
    /// layer, with the underlying message preserved.
    #[error("soroban rpc error: {0}")]
    Rpc(String),

    /// Malformed XDR outside the not-found decode path.
    #[error(transparent)]
    Xdr(#[from] XdrError),
}

impl Error {
    /// Reclassify errors whose message carries the registry contract's
    /// not-found marker. Fallback for upstream errors that report a
    /// missing record as an execution failure rather than a void value.
    pub(crate) fn reclassify(self) -> Self {
        let not_found = match &self {
            Error::Rpc(message) => message.contains(NOT_FOUND_MARKER),
            Error::Xdr(inner) => inner.to_string().contains(NOT_FOUND_MARKER),
            _ => false,
        };
        if not_found {
            Error::DomainNotFound
        } else {
            self
        }
    }
}
