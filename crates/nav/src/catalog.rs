//! The declarative navigation catalog.
//!
//! Every entry the console can ever show is listed here once, in display
//! order, together with its gate. Visibility is a single pass over this
//! table; nothing else in the crate adds or reorders entries.

use portal_types::{NavIcon, NavKey};
use portal_util::feature_flags::{CHAT_LINK_KEY, ENABLE_DATA_EXPORT_KEY, ENABLE_DRAWING_KEY, ENABLE_TASK_KEY};

/// Session requirement for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Visible to every session.
    Public,
    /// Visible to any signed-in session.
    Authenticated,
    /// Visible to signed-in administrators only.
    Administrator,
}

/// Flag requirement for an entry, on top of its session requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagGate {
    /// The flag must hold the exact value `"true"`.
    Enabled(&'static str),
    /// The flag must hold any non-empty value.
    Present(&'static str),
}

/// One row of the navigation catalog.
#[derive(Debug, Clone, Copy)]
pub struct EntrySpec {
    pub key: NavKey,
    pub label: &'static str,
    pub icon: NavIcon,
    pub target: &'static str,
    pub access: Access,
    pub flag: Option<FlagGate>,
}

/// The fixed universe of navigation entries, in display order.
///
/// The relative order here is the order retained entries appear in; the
/// login/register items are not part of the bar (see the account menu).
pub const CATALOG: &[EntrySpec] = &[
    EntrySpec {
        key: NavKey::Home,
        label: "Home",
        icon: NavIcon::Home,
        target: "/",
        access: Access::Public,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Pricing,
        label: "Pricing",
        icon: NavIcon::PriceTag,
        target: "/pricing",
        access: Access::Public,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Chat,
        label: "Chat",
        icon: NavIcon::Comment,
        target: "/chat",
        access: Access::Public,
        flag: Some(FlagGate::Present(CHAT_LINK_KEY)),
    },
    EntrySpec {
        key: NavKey::Channel,
        label: "Channels",
        icon: NavIcon::Layers,
        target: "/channel",
        access: Access::Administrator,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Redemption,
        label: "Redemptions",
        icon: NavIcon::Gift,
        target: "/redemption",
        access: Access::Administrator,
        flag: None,
    },
    EntrySpec {
        key: NavKey::UserManagement,
        label: "Users",
        icon: NavIcon::User,
        target: "/user",
        access: Access::Administrator,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Token,
        label: "Tokens",
        icon: NavIcon::Key,
        target: "/token",
        access: Access::Authenticated,
        flag: None,
    },
    EntrySpec {
        key: NavKey::TopUp,
        label: "Wallet",
        icon: NavIcon::CreditCard,
        target: "/topup",
        access: Access::Authenticated,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Log,
        label: "Logs",
        icon: NavIcon::Histogram,
        target: "/log",
        access: Access::Authenticated,
        flag: None,
    },
    EntrySpec {
        key: NavKey::Detail,
        label: "Dashboard",
        icon: NavIcon::CalendarClock,
        target: "/detail",
        access: Access::Authenticated,
        flag: Some(FlagGate::Enabled(ENABLE_DATA_EXPORT_KEY)),
    },
    EntrySpec {
        key: NavKey::Drawing,
        label: "Drawing",
        icon: NavIcon::Image,
        target: "/midjourney",
        access: Access::Authenticated,
        flag: Some(FlagGate::Enabled(ENABLE_DRAWING_KEY)),
    },
    EntrySpec {
        key: NavKey::AsyncTask,
        label: "Tasks",
        icon: NavIcon::Checklist,
        target: "/task",
        access: Access::Authenticated,
        flag: Some(FlagGate::Enabled(ENABLE_TASK_KEY)),
    },
    EntrySpec {
        key: NavKey::Settings,
        label: "Settings",
        icon: NavIcon::Setting,
        target: "/setting",
        access: Access::Authenticated,
        flag: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let mut seen = HashSet::new();
        for spec in CATALOG {
            assert!(seen.insert(spec.key), "duplicate catalog key {}", spec.key);
        }
    }

    #[test]
    fn catalog_targets_are_rooted_paths() {
        for spec in CATALOG {
            assert!(spec.target.starts_with('/'), "target {} is not a rooted path", spec.target);
        }
    }

    #[test]
    fn administrator_rows_sit_between_chat_and_token() {
        let keys: Vec<NavKey> = CATALOG.iter().map(|spec| spec.key).collect();
        let chat = keys.iter().position(|key| *key == NavKey::Chat).unwrap();
        let token = keys.iter().position(|key| *key == NavKey::Token).unwrap();
        for admin_key in [NavKey::Channel, NavKey::Redemption, NavKey::UserManagement] {
            let position = keys.iter().position(|key| *key == admin_key).unwrap();
            assert!(chat < position && position < token);
        }
    }
}
