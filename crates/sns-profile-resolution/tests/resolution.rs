//! Resolver behaviour against the in-memory name service

use proptest::prelude::*;
use sns_profile_resolution::memory::{InMemoryNameService, Operation};
use sns_profile_resolution::{
    DisplayModel, DomainKey, Error, FreshnessPolicy, PrimaryDomain, ProfileResolver, RecordKind,
    ResolverConfig, WalletAddress,
};
use std::sync::Arc;

fn wallet() -> WalletAddress {
    "HKKp49qGWXd639QsuH7JiLijfVW5UtCVY4s1n2HANwEA".parse().unwrap()
}

fn key(first: u8) -> DomainKey {
    let mut bytes = [0x42u8; 32];
    bytes[0] = first;
    DomainKey::from_bytes(bytes)
}

/// Three owned domains; `key(0x10)` has the smallest base58 text.
fn owned_domains() -> Vec<(DomainKey, &'static str)> {
    vec![(key(0x20), "second"), (key(0x10), "first"), (key(0x30), "third")]
}

fn resolver_with(service: &Arc<InMemoryNameService>) -> ProfileResolver<Arc<InMemoryNameService>> {
    ProfileResolver::new(Arc::clone(service))
}

#[tokio::test]
async fn test_fresh_primary_skips_fallback() {
    let service = Arc::new(InMemoryNameService::new());
    service
        .set_primary(wallet(), PrimaryDomain::fresh("bonfida"))
        .set_record("bonfida", RecordKind::Url, "https://sns.id");
    for (key, name) in owned_domains() {
        service.add_domain(wallet(), key, name);
    }

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("bonfida"));
    assert_eq!(model.record(RecordKind::Url), Some("https://sns.id"));
    assert_eq!(service.calls(Operation::DomainsByOwner), 0);
    assert_eq!(service.calls(Operation::ReverseLookup), 0);
    assert_eq!(service.calls(Operation::Records), 1);
}

#[tokio::test]
async fn test_fallback_picks_smallest_key() {
    let service = Arc::new(InMemoryNameService::new());
    for (key, name) in owned_domains() {
        service.add_domain(wallet(), key, name);
    }

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("first"));
    assert_eq!(service.calls(Operation::ReverseLookup), 1);
}

#[tokio::test]
async fn test_stale_primary_falls_back() {
    let service = Arc::new(InMemoryNameService::new());
    service.set_primary(wallet(), PrimaryDomain::stale("outdated"));
    for (key, name) in owned_domains() {
        service.add_domain(wallet(), key, name);
    }

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_primary_without_name_falls_back() {
    let service = Arc::new(InMemoryNameService::new());
    service.set_primary(wallet(), PrimaryDomain::default());
    service.add_domain(wallet(), key(0x10), "first");

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_primary_error_is_recovered() {
    let service = Arc::new(InMemoryNameService::new());
    service
        .set_primary(wallet(), PrimaryDomain::fresh("bonfida"))
        .fail(Operation::PrimaryDomain, "account fetch failed");
    service.add_domain(wallet(), key(0x10), "first");

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_legacy_freshness_policy() {
    let service = Arc::new(InMemoryNameService::new());
    service.set_primary(wallet(), PrimaryDomain::stale("bonfida"));
    service.add_domain(wallet(), key(0x10), "first");

    let config = ResolverConfig::default().with_freshness(FreshnessPolicy::RequireStaleFlag);
    let resolver = ProfileResolver::with_config(Arc::clone(&service), config);
    let model = resolver.resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("bonfida"));

    // A fresh primary is rejected under the legacy rule
    service.set_primary(wallet(), PrimaryDomain::fresh("bonfida"));
    let model = resolver.resolve(&wallet()).await.unwrap();
    assert_eq!(model.domain.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_no_domains_yields_empty_model() {
    let service = Arc::new(InMemoryNameService::new());

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    assert_eq!(model, DisplayModel::empty());
    assert_eq!(service.calls(Operation::ReverseLookup), 0);
    assert_eq!(service.calls(Operation::Records), 0);
}

#[tokio::test]
async fn test_records_drop_unset_kinds() {
    let service = Arc::new(InMemoryNameService::new());
    service
        .set_primary(wallet(), PrimaryDomain::fresh("bonfida"))
        .set_record("bonfida", RecordKind::Pic, "https://example.com/a.png")
        .set_record("bonfida", RecordKind::Twitter, "@bonfida");

    let model = resolver_with(&service).resolve(&wallet()).await.unwrap();
    let kinds: Vec<RecordKind> = model.records.keys().copied().collect();
    assert_eq!(kinds, vec![RecordKind::Pic, RecordKind::Twitter]);

    let options = service.last_record_options().unwrap();
    assert!(options.deserialize);
}

#[tokio::test]
async fn test_unrecoverable_errors_propagate() {
    for operation in [Operation::DomainsByOwner, Operation::ReverseLookup, Operation::Records] {
        let service = Arc::new(InMemoryNameService::new());
        service.add_domain(wallet(), key(0x10), "first");
        service.fail(operation, "rpc unavailable");

        let result = resolver_with(&service).resolve(&wallet()).await;
        assert!(
            matches!(result, Err(Error::Network(_))),
            "{:?} should propagate, got {:?}",
            operation,
            result
        );
    }
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let service = Arc::new(InMemoryNameService::new());
    for (key, name) in owned_domains() {
        service.add_domain(wallet(), key, name);
    }
    service
        .set_record("first", RecordKind::Telegram, "@first")
        .set_record("first", RecordKind::Url, "https://first.example");

    let resolver = resolver_with(&service);
    let a = resolver.resolve(&wallet()).await.unwrap();
    let b = resolver.resolve(&wallet()).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
}

proptest! {
    #[test]
    fn prop_fallback_ignores_enumeration_order(
        order in Just(owned_domains()).prop_shuffle()
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let service = Arc::new(InMemoryNameService::new());
        for (key, name) in order {
            service.add_domain(wallet(), key, name);
        }

        let model = runtime
            .block_on(resolver_with(&service).resolve(&wallet()))
            .unwrap();
        prop_assert_eq!(model.domain.as_deref(), Some("first"));
    }
}
