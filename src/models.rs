//! Record types returned by domain resolution.

use serde::{Deserialize, Serialize};

/// A top-level domain record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Lookup node, 64 lowercase hex characters.
    pub node: String,

    /// Account that owns the domain.
    pub owner: String,

    /// Account or contract the domain resolves to.
    pub address: String,

    /// Expiration of the registration, unix seconds.
    pub exp_date: u64,

    /// Ledger snapshot the record was taken at.
    pub snapshot: u64,

    /// Collateral locked for the registration, in stroops.
    pub collateral: u128,
}

/// A subdomain record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDomainRecord {
    /// Lookup node, 64 lowercase hex characters.
    pub node: String,

    /// Node of the parent domain.
    pub parent: String,

    /// Account or contract the subdomain resolves to.
    pub address: String,

    /// Ledger snapshot the record was taken at.
    pub snapshot: u64,
}

/// Result of a domain search, discriminated by record type.
///
/// Callers must match on the variant before reading fields. Serializes
/// as `{"record_type": "Domain", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "record_type", content = "value")]
pub enum DomainResult {
    Domain(DomainRecord),
    SubDomain(SubDomainRecord),
}
