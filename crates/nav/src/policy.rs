//! Visibility and activation rules over the navigation catalog.

use portal_types::{NavEntry, SessionState};
use portal_util::FlagSource;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{Access, CATALOG, FlagGate};

/// Error returned when an activation key matches no visible entry.
///
/// The usual cause is a stale key from a previous entry list (e.g., a click
/// racing a logout) or a forged key; callers typically ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no visible entry matches key '{0}'")]
pub struct EntryNotFound(pub String);

/// Navigation seam the console shell plugs its routing into.
pub trait Router {
    fn navigate(&mut self, path: &str);
}

/// Compute the ordered entry list visible to a session.
///
/// A single pass over the catalog: an entry is retained when its session
/// requirement and its flag gate (if any) both hold. Retained entries keep
/// the catalog's relative order, so the output is deterministic for
/// identical inputs. The list is cheap to build and callers recompute it on
/// every render rather than caching it.
pub fn build_entries(session: &SessionState, flags: &dyn FlagSource) -> Vec<NavEntry> {
    CATALOG
        .iter()
        .filter(|spec| access_allows(spec.access, session) && gate_allows(spec.flag, flags))
        .map(|spec| NavEntry::new(spec.key, spec.label, spec.icon, spec.target))
        .collect()
}

/// Look up the target path for an activation key.
///
/// Matches the key exactly against the supplied entry list; the first match
/// wins. Keys outside the current list yield [`EntryNotFound`].
pub fn resolve_target<'a>(entries: &'a [NavEntry], key: &str) -> Result<&'a str, EntryNotFound> {
    entries
        .iter()
        .find(|entry| entry.key.as_str() == key)
        .map(|entry| entry.target.as_str())
        .ok_or_else(|| EntryNotFound(key.to_string()))
}

/// Resolve an activation key and navigate on a match.
///
/// Stale or forged keys are ignored without side effects. Returns whether a
/// navigation happened.
pub fn activate(entries: &[NavEntry], key: &str, router: &mut dyn Router) -> bool {
    match resolve_target(entries, key) {
        Ok(target) => {
            router.navigate(target);
            true
        }
        Err(error) => {
            debug!(%error, "ignoring activation");
            false
        }
    }
}

fn access_allows(access: Access, session: &SessionState) -> bool {
    match access {
        Access::Public => true,
        Access::Authenticated => session.is_authenticated(),
        Access::Administrator => session.is_administrator(),
    }
}

fn gate_allows(gate: Option<FlagGate>, flags: &dyn FlagSource) -> bool {
    match gate {
        None => true,
        Some(FlagGate::Enabled(name)) => flags.is_enabled(name),
        Some(FlagGate::Present(name)) => flags.is_set(name),
    }
}
