//! Name service port
//!
//! The resolver only talks to the chain through this trait, so any RPC
//! client, SDK binding or test fake can back it.

use crate::{
    DomainKey, DomainName, PrimaryDomain, RecordEntry, RecordFetchOptions, RecordKind, Result,
    WalletAddress,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the Solana Name Service
#[async_trait]
pub trait NameService: Send + Sync {
    /// Primary domain designated by `owner`
    async fn primary_domain(&self, owner: &WalletAddress) -> Result<PrimaryDomain>;

    /// Keys of every domain account owned by `owner`, in no particular order
    async fn domains_by_owner(&self, owner: &WalletAddress) -> Result<Vec<DomainKey>>;

    /// Human-readable name of a domain account
    async fn reverse_lookup(&self, domain: &DomainKey) -> Result<DomainName>;

    /// Fetch several records of `domain` in one request
    ///
    /// Returns one slot per requested kind, `None` where the record is unset.
    async fn records(
        &self,
        domain: &str,
        kinds: &[RecordKind],
        options: RecordFetchOptions,
    ) -> Result<Vec<Option<RecordEntry>>>;
}

#[async_trait]
impl<T: NameService + ?Sized> NameService for Arc<T> {
    async fn primary_domain(&self, owner: &WalletAddress) -> Result<PrimaryDomain> {
        (**self).primary_domain(owner).await
    }

    async fn domains_by_owner(&self, owner: &WalletAddress) -> Result<Vec<DomainKey>> {
        (**self).domains_by_owner(owner).await
    }

    async fn reverse_lookup(&self, domain: &DomainKey) -> Result<DomainName> {
        (**self).reverse_lookup(domain).await
    }

    async fn records(
        &self,
        domain: &str,
        kinds: &[RecordKind],
        options: RecordFetchOptions,
    ) -> Result<Vec<Option<RecordEntry>>> {
        (**self).records(domain, kinds, options).await
    }
}
