//! Profile session
//!
//! Owns the single display slot for the connected wallet. Every address change
//! starts a new generation; a resolution only commits while its generation is
//! still the latest, so a slow lookup for a previous wallet can never
//! overwrite the profile of the current one.

use crate::{DisplayModel, NameService, ProfileResolver, WalletAddress};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

static EMPTY_MODEL: DisplayModel = DisplayModel::empty();

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    /// No wallet connected
    Idle,
    /// Lookup in flight; `model` is what was shown before it started
    Resolving {
        /// Wallet being resolved
        address: WalletAddress,
        /// Request generation
        generation: u64,
        /// Previously displayed model
        model: DisplayModel,
    },
    /// Lookup finished
    Resolved {
        /// Resolved wallet
        address: WalletAddress,
        /// Request generation
        generation: u64,
        /// Resolved model
        model: DisplayModel,
    },
    /// Lookup failed; `model` is left as it was before the attempt
    Failed {
        /// Wallet that failed to resolve
        address: WalletAddress,
        /// Request generation
        generation: u64,
        /// Previously displayed model
        model: DisplayModel,
        /// Message shown inline to the user
        error: String,
    },
}

impl ProfileState {
    /// Model to display
    pub fn model(&self) -> &DisplayModel {
        match self {
            Self::Idle => &EMPTY_MODEL,
            Self::Resolving { model, .. }
            | Self::Resolved { model, .. }
            | Self::Failed { model, .. } => model,
        }
    }

    /// Wallet the state belongs to
    pub fn address(&self) -> Option<&WalletAddress> {
        match self {
            Self::Idle => None,
            Self::Resolving { address, .. }
            | Self::Resolved { address, .. }
            | Self::Failed { address, .. } => Some(address),
        }
    }

    /// Generation that produced the state (0 when idle)
    pub fn generation(&self) -> u64 {
        match self {
            Self::Idle => 0,
            Self::Resolving { generation, .. }
            | Self::Resolved { generation, .. }
            | Self::Failed { generation, .. } => *generation,
        }
    }

    /// Check if a lookup is in flight
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving { .. })
    }

    /// Inline error message, if the last lookup failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Outcome of a session update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Result written to the session
    Applied,
    /// A newer update started first; result discarded
    Superseded,
}

struct Inner<S> {
    resolver: ProfileResolver<S>,
    // Transitions and generation bumps both happen under the watch lock.
    state: watch::Sender<ProfileState>,
    generation: AtomicU64,
}

/// Profile session for one wallet connection
pub struct ProfileSession<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for ProfileSession<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NameService> ProfileSession<S> {
    /// Create idle session
    pub fn new(resolver: ProfileResolver<S>) -> Self {
        let (state, _) = watch::channel(ProfileState::Idle);
        Self {
            inner: Arc::new(Inner {
                resolver,
                state,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Resolver used by the session
    pub fn resolver(&self) -> &ProfileResolver<S> {
        &self.inner.resolver
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ProfileState {
        self.inner.state.borrow().clone()
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.inner.state.subscribe()
    }

    /// Latest generation handed out
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    /// Switch to a new wallet (or none) and resolve its profile
    ///
    /// Disconnecting resets the session without touching the name service.
    pub async fn set_address(&self, address: Option<WalletAddress>) -> Commit {
        let Some(address) = address else {
            self.inner.state.send_modify(|state| {
                let generation = self.next_generation();
                debug!("Wallet disconnected (generation {})", generation);
                *state = ProfileState::Idle;
            });
            return Commit::Applied;
        };

        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.next_generation();
            *state = ProfileState::Resolving {
                address,
                generation,
                model: state.model().clone(),
            };
        });
        debug!("Resolving {} (generation {})", address, generation);

        let result = self
            .inner
            .resolver
            .resolve(&address)
            .await
            .map_err(|e| e.to_string());
        let domain = result.as_ref().ok().and_then(|model| model.domain.clone());
        let failure = result.as_ref().err().cloned();

        let applied = self.inner.state.send_if_modified(|state| {
            if self.generation() != generation {
                return false;
            }
            *state = match result {
                Ok(model) => ProfileState::Resolved {
                    address,
                    generation,
                    model,
                },
                Err(error) => ProfileState::Failed {
                    address,
                    generation,
                    model: state.model().clone(),
                    error,
                },
            };
            true
        });

        if !applied {
            warn!(
                "Discarding result for {} (generation {} superseded by {})",
                address,
                generation,
                self.generation()
            );
            return Commit::Superseded;
        }

        match failure {
            Some(error) => warn!("Profile lookup for {} failed: {}", address, error),
            None => info!(
                "Profile for {} committed (generation {}, domain {:?})",
                address, generation, domain
            ),
        }
        Commit::Applied
    }

    /// Resolve the current wallet again
    ///
    /// Returns `None` when no wallet is connected.
    pub async fn refresh(&self) -> Option<Commit> {
        let address = self.state().address().copied()?;
        Some(self.set_address(Some(address)).await)
    }

    fn next_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1
    }
}
