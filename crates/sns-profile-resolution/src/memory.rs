//! In-memory name service
//!
//! Deterministic backend built from registered fixtures. Used by tests and for
//! running a session without network access.

use crate::{
    DomainKey, DomainName, Error, NameService, PrimaryDomain, RecordEntry, RecordFetchOptions,
    RecordKind, Result, WalletAddress,
};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

/// Name service operation, for call counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `primary_domain`
    PrimaryDomain,
    /// `domains_by_owner`
    DomainsByOwner,
    /// `reverse_lookup`
    ReverseLookup,
    /// `records`
    Records,
}

#[derive(Default)]
struct Fixtures {
    primary: HashMap<WalletAddress, PrimaryDomain>,
    owned: HashMap<WalletAddress, Vec<DomainKey>>,
    names: HashMap<DomainKey, DomainName>,
    records: HashMap<(DomainName, RecordKind), String>,
    failures: HashMap<Operation, String>,
}

/// Fixture-backed name service
#[derive(Default)]
pub struct InMemoryNameService {
    fixtures: RwLock<Fixtures>,
    calls: Mutex<HashMap<Operation, usize>>,
    last_options: Mutex<Option<RecordFetchOptions>>,
}

impl InMemoryNameService {
    /// Create empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary-lookup reply for `owner`
    pub fn set_primary(&self, owner: WalletAddress, primary: PrimaryDomain) -> &Self {
        self.fixtures.write().primary.insert(owner, primary);
        self
    }

    /// Register a domain owned by `owner`
    ///
    /// Owned domains are enumerated in registration order.
    pub fn add_domain(&self, owner: WalletAddress, key: DomainKey, name: &str) -> &Self {
        let mut fixtures = self.fixtures.write();
        fixtures.owned.entry(owner).or_default().push(key);
        fixtures.names.insert(key, name.to_string());
        self
    }

    /// Set a record of `domain`
    pub fn set_record(&self, domain: &str, kind: RecordKind, content: &str) -> &Self {
        self.fixtures
            .write()
            .records
            .insert((domain.to_string(), kind), content.to_string());
        self
    }

    /// Make every call to `operation` fail with a network error
    pub fn fail(&self, operation: Operation, message: &str) -> &Self {
        self.fixtures
            .write()
            .failures
            .insert(operation, message.to_string());
        self
    }

    /// Stop failing `operation`
    pub fn recover(&self, operation: Operation) -> &Self {
        self.fixtures.write().failures.remove(&operation);
        self
    }

    /// Number of calls made to `operation`
    pub fn calls(&self, operation: Operation) -> usize {
        self.calls.lock().get(&operation).copied().unwrap_or(0)
    }

    /// Number of calls made to any operation
    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }

    /// Options passed to the most recent `records` call
    pub fn last_record_options(&self) -> Option<RecordFetchOptions> {
        *self.last_options.lock()
    }

    fn enter(&self, operation: Operation) -> Result<()> {
        *self.calls.lock().entry(operation).or_insert(0) += 1;
        match self.fixtures.read().failures.get(&operation) {
            Some(message) => Err(Error::Network(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NameService for InMemoryNameService {
    async fn primary_domain(&self, owner: &WalletAddress) -> Result<PrimaryDomain> {
        self.enter(Operation::PrimaryDomain)?;
        self.fixtures
            .read()
            .primary
            .get(owner)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No primary domain for {}", owner)))
    }

    async fn domains_by_owner(&self, owner: &WalletAddress) -> Result<Vec<DomainKey>> {
        self.enter(Operation::DomainsByOwner)?;
        Ok(self
            .fixtures
            .read()
            .owned
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }

    async fn reverse_lookup(&self, domain: &DomainKey) -> Result<DomainName> {
        self.enter(Operation::ReverseLookup)?;
        self.fixtures
            .read()
            .names
            .get(domain)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No reverse record for {}", domain)))
    }

    async fn records(
        &self,
        domain: &str,
        kinds: &[RecordKind],
        options: RecordFetchOptions,
    ) -> Result<Vec<Option<RecordEntry>>> {
        self.enter(Operation::Records)?;
        *self.last_options.lock() = Some(options);

        let fixtures = self.fixtures.read();
        Ok(kinds
            .iter()
            .map(|kind| {
                fixtures
                    .records
                    .get(&(domain.to_string(), *kind))
                    .map(|content| RecordEntry::new(*kind, content.clone()))
            })
            .collect())
    }
}
