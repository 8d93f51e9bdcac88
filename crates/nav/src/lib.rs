//! Navigation policy for the Portal console header.
//!
//! This crate decides which navigation entries a session sees and maps
//! activations back to route targets. It supports:
//! - A fixed, declaratively gated entry catalog
//! - Session- and flag-driven visibility with deterministic ordering
//! - Key-to-target resolution with silent handling of stale keys
//! - Account menu and header composition for renderers to consume
//!
//! The crate is self-contained and not wired to any rendering layer.
//! Consumers feed it a session snapshot and a flag source, and render the
//! returned models however they like.
//!
//! # Usage
//!
//! ```ignore
//! use portal_nav::{build_entries, resolve_target};
//! use portal_types::SessionState;
//! use portal_util::InMemoryFlagStore;
//!
//! let flags = InMemoryFlagStore::new();
//! let entries = build_entries(&SessionState::anonymous(), &flags);
//! let target = resolve_target(&entries, "pricing")?;
//! ```

mod account;
mod catalog;
mod header;
mod policy;

pub use account::{AccountMenu, account_menu};
pub use catalog::{Access, CATALOG, EntrySpec, FlagGate};
pub use header::{Branding, DEFAULT_SYSTEM_NAME, HeaderModel, branding, compose_header};
pub use policy::{EntryNotFound, Router, activate, build_entries, resolve_target};
