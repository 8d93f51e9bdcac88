//! Deterministic avatar styling for the account menu.
//!
//! The header shows a small avatar with the user's first character on a
//! color picked from a fixed palette. The color is a pure function of the
//! username so it is stable across sessions and machines.

/// Palette of named avatar colors understood by the console's renderers.
pub const AVATAR_COLORS: &[&str] = &[
    "amber",
    "blue",
    "cyan",
    "green",
    "grey",
    "indigo",
    "light-blue",
    "light-green",
    "lime",
    "orange",
    "pink",
    "purple",
    "red",
    "teal",
    "violet",
    "yellow",
];

/// Picks the avatar color for a username.
///
/// The byte sum modulo the palette size keeps the mapping stable for any
/// input, including empty and non-ASCII names.
pub fn color_for_name(name: &str) -> &'static str {
    let sum: usize = name.bytes().map(usize::from).sum();
    AVATAR_COLORS[sum % AVATAR_COLORS.len()]
}

/// First character of the username, shown inside the avatar circle.
pub fn initial(name: &str) -> Option<char> {
    name.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_deterministic() {
        assert_eq!(color_for_name("alice"), color_for_name("alice"));
        assert_eq!(color_for_name(""), AVATAR_COLORS[0]);
    }

    #[test]
    fn color_comes_from_palette() {
        for name in ["alice", "bob", "管理员", "z"] {
            assert!(AVATAR_COLORS.contains(&color_for_name(name)));
        }
    }

    #[test]
    fn initial_handles_multibyte_names() {
        assert_eq!(initial("alice"), Some('a'));
        assert_eq!(initial("管理员"), Some('管'));
        assert_eq!(initial(""), None);
    }
}
