//! Profile resolution for Solana Name Service domains
//!
//! Looks up the `.sol` domain of a connected wallet (primary domain, or the
//! first owned domain as a fallback), fetches its profile records in one
//! batched request and exposes the result as a read-only display model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod config;
pub mod error;
pub mod logging;
pub mod memory;
pub mod model;
pub mod records;
pub mod resolver;
pub mod service;
pub mod session;
pub mod view;

pub use address::{DomainKey, WalletAddress};
pub use config::{FreshnessPolicy, ResolverConfig};
pub use error::{Error, Result};
pub use memory::InMemoryNameService;
pub use model::{DisplayModel, DomainName, PrimaryDomain};
pub use records::{RecordEntry, RecordFetchOptions, RecordKind};
pub use resolver::ProfileResolver;
pub use service::NameService;
pub use session::{Commit, ProfileSession, ProfileState};
pub use view::{Avatar, ProfileView};
