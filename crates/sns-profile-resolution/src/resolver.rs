//! Profile resolution
//!
//! Resolves the wallet's primary domain, falling back to the first owned
//! domain, then fetches its records in one batched request.

use crate::address::first_by_base58;
use crate::{
    DisplayModel, DomainName, NameService, RecordEntry, RecordFetchOptions, ResolverConfig, Result,
    WalletAddress,
};
use tracing::{debug, info};

/// Profile resolver over a name service
pub struct ProfileResolver<S> {
    service: S,
    config: ResolverConfig,
}

impl<S: NameService> ProfileResolver<S> {
    /// Create resolver with the default config
    pub fn new(service: S) -> Self {
        Self::with_config(service, ResolverConfig::default())
    }

    /// Create resolver with a custom config
    pub fn with_config(service: S, config: ResolverConfig) -> Self {
        info!(
            "Creating profile resolver: records={:?} freshness={:?}",
            config.records, config.freshness
        );
        Self { service, config }
    }

    /// Current config
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Underlying name service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Resolve the display model for a wallet
    ///
    /// A wallet without any domain yields an empty model. Errors from the
    /// owned-domain fallback or the record fetch are returned as-is.
    pub async fn resolve(&self, owner: &WalletAddress) -> Result<DisplayModel> {
        let Some(domain) = self.primary_or_first(owner).await? else {
            info!("No domain owned by {}", owner);
            return Ok(DisplayModel::empty());
        };

        let records = self
            .service
            .records(&domain, &self.config.records, RecordFetchOptions::decoded())
            .await?;

        let model = aggregate(domain, records);
        info!(
            "Resolved {} to {:?} with {} record(s)",
            owner,
            model.domain,
            model.records.len()
        );
        Ok(model)
    }

    /// Primary domain if usable, else the first owned domain by key order
    pub async fn primary_or_first(&self, owner: &WalletAddress) -> Result<Option<DomainName>> {
        match self.service.primary_domain(owner).await {
            Ok(primary) => match primary.name {
                Some(name) if self.config.freshness.accepts(primary.stale) => {
                    debug!("Using primary domain {} for {}", name, owner);
                    return Ok(Some(name));
                }
                Some(name) => debug!(
                    "Primary domain {} for {} rejected (stale={}), falling back",
                    name, owner, primary.stale
                ),
                None => debug!("No primary domain for {}, falling back", owner),
            },
            Err(e) => debug!("Primary lookup for {} failed ({}), falling back", owner, e),
        }

        let domains = self.service.domains_by_owner(owner).await?;
        let Some(first) = first_by_base58(&domains) else {
            return Ok(None);
        };

        debug!(
            "Using first of {} owned domain(s) for {}: {}",
            domains.len(),
            owner,
            first
        );
        let name = self.service.reverse_lookup(&first).await?;
        Ok(Some(name))
    }
}

/// Build the display model from a batched record response
///
/// Null slots and empty contents leave no key behind.
pub fn aggregate(domain: DomainName, entries: Vec<Option<RecordEntry>>) -> DisplayModel {
    let mut model = DisplayModel::for_domain(domain);
    for entry in entries.into_iter().flatten() {
        if entry.content.is_empty() {
            continue;
        }
        model.records.insert(entry.kind, entry.content);
    }
    model
}
