//! Display projection of a session state
//!
//! Flattens a [`ProfileState`] into what a profile card shows: the domain with
//! its TLD, an avatar (or the logo placeholder, spinning while loading), one
//! field per configured record and an inline error line.

use crate::{ProfileState, RecordKind, ResolverConfig};
use serde::Serialize;

/// Avatar slot of the profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    /// Picture from the `pic` record
    Picture(String),
    /// Placeholder logo
    Logo {
        /// Lookup in flight
        spinning: bool,
    },
}

/// Read-only profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    /// Domain with TLD, empty when none resolved
    pub domain_label: String,
    /// Avatar slot
    pub avatar: Avatar,
    /// Record fields in display order, empty values for unset records
    pub fields: Vec<(RecordKind, String)>,
    /// Inline error message
    pub error: Option<String>,
}

impl ProfileView {
    /// Build the card for a session state
    pub fn from_state(state: &ProfileState, config: &ResolverConfig) -> Self {
        let model = state.model();

        let domain_label = model
            .domain
            .as_deref()
            .map(|domain| config.display_name(domain))
            .unwrap_or_default();

        let avatar = match model.record(RecordKind::Pic) {
            Some(url) => Avatar::Picture(url.to_string()),
            None => Avatar::Logo {
                spinning: state.is_resolving(),
            },
        };

        let fields = config
            .records
            .iter()
            .map(|kind| (*kind, model.record(*kind).unwrap_or_default().to_string()))
            .collect();

        Self {
            domain_label,
            avatar,
            fields,
            error: state.error().map(str::to_string),
        }
    }
}
