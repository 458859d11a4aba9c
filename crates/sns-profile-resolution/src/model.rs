//! Display model produced by a resolution

use crate::RecordKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Human-readable domain name, without the TLD suffix
pub type DomainName = String;

/// Reply of a primary-domain lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimaryDomain {
    /// Primary domain name, if the owner set one
    pub name: Option<DomainName>,
    /// Freshness flag of the reverse record
    pub stale: bool,
}

impl PrimaryDomain {
    /// Fresh primary domain
    pub fn fresh(name: impl Into<DomainName>) -> Self {
        Self {
            name: Some(name.into()),
            stale: false,
        }
    }

    /// Primary domain whose reverse record is flagged stale
    pub fn stale(name: impl Into<DomainName>) -> Self {
        Self {
            name: Some(name.into()),
            stale: true,
        }
    }
}

/// Read-only profile shown for a wallet
///
/// `records` only holds kinds that resolved with content; a missing key
/// means the record is not set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayModel {
    /// Resolved domain
    pub domain: Option<DomainName>,
    /// Record values keyed by kind
    pub records: BTreeMap<RecordKind, String>,
}

impl DisplayModel {
    /// Model with no domain and no records
    pub const fn empty() -> Self {
        Self {
            domain: None,
            records: BTreeMap::new(),
        }
    }

    /// Model for a domain with no records yet
    pub fn for_domain(domain: impl Into<DomainName>) -> Self {
        Self {
            domain: Some(domain.into()),
            records: BTreeMap::new(),
        }
    }

    /// Check if nothing resolved
    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.records.is_empty()
    }

    /// Record value for a kind
    pub fn record(&self, kind: RecordKind) -> Option<&str> {
        self.records.get(&kind).map(String::as_str)
    }
}
