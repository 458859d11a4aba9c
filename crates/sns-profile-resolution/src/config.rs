//! Resolver configuration
//!
//! Which records to fetch, how to treat the primary-domain stale flag and the
//! TLD appended for display. Stored as JSON.

use crate::{Error, RecordKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Acceptance rule for the stale flag of a primary-domain lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessPolicy {
    /// Accept the primary domain only when its reverse record is not stale
    #[default]
    RequireFresh,
    /// Accept the primary domain only when the stale flag is set.
    ///
    /// Matches older web clients that tested the flag the other way round.
    RequireStaleFlag,
}

impl FreshnessPolicy {
    /// Check a primary-domain stale flag against the policy
    pub fn accepts(&self, stale: bool) -> bool {
        match self {
            Self::RequireFresh => !stale,
            Self::RequireStaleFlag => stale,
        }
    }
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Records fetched for the resolved domain, in display order
    pub records: Vec<RecordKind>,
    /// Stale-flag rule for the primary lookup
    pub freshness: FreshnessPolicy,
    /// TLD appended to the domain for display
    pub tld: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            records: RecordKind::ALL.to_vec(),
            freshness: FreshnessPolicy::RequireFresh,
            tld: "sol".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the freshness policy
    pub fn with_freshness(mut self, freshness: FreshnessPolicy) -> Self {
        self.freshness = freshness;
        self
    }

    /// Set the fetched records
    pub fn with_records(mut self, records: Vec<RecordKind>) -> Self {
        self.records = records;
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(Error::Config("No record kinds configured".to_string()));
        }

        let mut seen = BTreeSet::new();
        for kind in &self.records {
            if !seen.insert(*kind) {
                return Err(Error::Config(format!("Duplicate record kind: {}", kind)));
            }
        }

        let tld = self.tld.trim_start_matches('.');
        if tld.is_empty() || tld.contains('.') {
            return Err(Error::Config(format!("Invalid TLD: '{}'", self.tld)));
        }

        Ok(())
    }

    /// Domain with its TLD, e.g. `bonfida.sol`
    pub fn display_name(&self, domain: &str) -> String {
        format!("{}.{}", domain, self.tld.trim_start_matches('.'))
    }
}
