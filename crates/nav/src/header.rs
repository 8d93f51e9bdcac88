//! Header composition: branding, entries, account menu, theme, festivity.

use chrono::NaiveDate;
use portal_types::{NavEntry, SessionState, Theme};
use portal_util::FlagSource;
use portal_util::feature_flags::{LOGO_KEY, SYSTEM_NAME_KEY};
use portal_util::festive;

use crate::account::{AccountMenu, account_menu};
use crate::policy::build_entries;

/// Branding name used when the backend never provided one.
pub const DEFAULT_SYSTEM_NAME: &str = "Portal";

/// Branding block at the leading edge of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Name shown next to the logo.
    pub system_name: String,
    /// Logo image URL, when the operator configured one.
    pub logo: Option<String>,
}

/// Read the branding values the backend seeded into the flag store.
pub fn branding(flags: &dyn FlagSource) -> Branding {
    let system_name = flags
        .flag(SYSTEM_NAME_KEY)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_SYSTEM_NAME.to_string());
    let logo = flags.flag(LOGO_KEY).filter(|logo| !logo.is_empty());
    Branding { system_name, logo }
}

/// Everything a renderer needs to draw the header once.
///
/// Recomputed per request; nothing is cached, so the model always reflects
/// the latest session and flag snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub branding: Branding,
    /// Ordered visible navigation entries.
    pub entries: Vec<NavEntry>,
    pub account: AccountMenu,
    /// Active color scheme, as persisted in the user preferences.
    pub theme: Theme,
    /// Arms the New Year celebration when true.
    pub festive: bool,
}

/// Compose the header model for one render.
pub fn compose_header(session: &SessionState, flags: &dyn FlagSource, theme: Theme, today: NaiveDate) -> HeaderModel {
    HeaderModel {
        branding: branding(flags),
        entries: build_entries(session, flags),
        account: account_menu(session),
        theme,
        festive: festive::is_new_year_window(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::{NavKey, UserProfile, UserRole};
    use portal_util::feature_flags::CHAT_LINK_KEY;
    use portal_util::{FlagStore, InMemoryFlagStore};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn branding_defaults_when_unseeded() {
        let flags = InMemoryFlagStore::new();
        let branding = branding(&flags);
        assert_eq!(branding.system_name, DEFAULT_SYSTEM_NAME);
        assert!(branding.logo.is_none());
    }

    #[test]
    fn branding_reads_seeded_values() {
        let flags = InMemoryFlagStore::new();
        flags.set_flag(SYSTEM_NAME_KEY, "My Portal").unwrap();
        flags.set_flag(LOGO_KEY, "https://cdn.example.com/logo.png").unwrap();

        let branding = branding(&flags);
        assert_eq!(branding.system_name, "My Portal");
        assert_eq!(branding.logo.as_deref(), Some("https://cdn.example.com/logo.png"));
    }

    #[test]
    fn header_reflects_session_and_flags() {
        let flags = InMemoryFlagStore::new();
        flags.set_flag(CHAT_LINK_KEY, "https://chat.example.com").unwrap();
        let session = SessionState::signed_in(UserProfile::new("alice", UserRole::User));

        let model = compose_header(&session, &flags, Theme::Dark, date(2026, 8, 5));
        let keys: Vec<NavKey> = model.entries.iter().map(|entry| entry.key).collect();
        assert!(keys.contains(&NavKey::Chat));
        assert!(keys.contains(&NavKey::Settings));
        assert!(matches!(model.account, AccountMenu::SignedIn { .. }));
        assert_eq!(model.theme, Theme::Dark);
        assert!(!model.festive);
    }

    #[test]
    fn header_is_festive_on_new_years_day() {
        let flags = InMemoryFlagStore::new();
        let model = compose_header(&SessionState::anonymous(), &flags, Theme::Light, date(2027, 1, 1));
        assert!(model.festive);
        assert!(matches!(model.account, AccountMenu::SignedOut { .. }));
    }
}
