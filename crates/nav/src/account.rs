//! The account region at the trailing edge of the header.

use portal_types::{NavEntry, NavIcon, NavKey, SessionState};
use portal_util::avatar;

/// What the header shows next to the navigation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountMenu {
    /// Anonymous sessions get explicit login/register entries.
    SignedOut { entries: Vec<NavEntry> },
    /// Signed-in sessions get an avatar dropdown carrying the logout action.
    SignedIn {
        username: String,
        /// First character of the username, drawn inside the avatar.
        initial: Option<char>,
        /// Deterministic palette color for the avatar background.
        avatar_color: &'static str,
    },
}

/// Build the account menu for a session snapshot.
pub fn account_menu(session: &SessionState) -> AccountMenu {
    match session.username() {
        Some(username) => AccountMenu::SignedIn {
            username: username.to_string(),
            initial: avatar::initial(username),
            avatar_color: avatar::color_for_name(username),
        },
        None => AccountMenu::SignedOut {
            entries: vec![
                NavEntry::new(NavKey::Login, "Log In", NavIcon::Key, "/login"),
                NavEntry::new(NavKey::Register, "Register", NavIcon::User, "/register"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::{UserProfile, UserRole};

    #[test]
    fn anonymous_sessions_get_login_and_register() {
        let menu = account_menu(&SessionState::anonymous());
        let AccountMenu::SignedOut { entries } = menu else {
            panic!("expected signed-out menu");
        };
        let keys: Vec<NavKey> = entries.iter().map(|entry| entry.key).collect();
        assert_eq!(keys, vec![NavKey::Login, NavKey::Register]);
        assert_eq!(entries[0].target, "/login");
        assert_eq!(entries[1].target, "/register");
    }

    #[test]
    fn signed_in_menu_carries_avatar_details() {
        let session = SessionState::signed_in(UserProfile::new("alice", UserRole::User));
        let AccountMenu::SignedIn {
            username,
            initial,
            avatar_color,
        } = account_menu(&session)
        else {
            panic!("expected signed-in menu");
        };
        assert_eq!(username, "alice");
        assert_eq!(initial, Some('a'));
        assert_eq!(avatar_color, avatar::color_for_name("alice"));
    }

    #[test]
    fn avatar_details_are_stable_across_rebuilds() {
        let session = SessionState::signed_in(UserProfile::new("管理员", UserRole::Administrator));
        assert_eq!(account_menu(&session), account_menu(&session));
    }
}
