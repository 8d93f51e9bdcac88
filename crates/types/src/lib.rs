use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Stable identifier for a navigation entry.
///
/// The set of keys is fixed: the policy never emits an entry whose key is
/// outside this universe, and callers hand keys back (e.g., from a click)
/// to resolve the entry's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Home,
    Pricing,
    Chat,
    Channel,
    Redemption,
    /// User administration view. Serialized as `user` for parity with the
    /// backend's route naming.
    #[serde(rename = "user")]
    UserManagement,
    Token,
    TopUp,
    Log,
    Detail,
    /// Image generation view. The backend route kept its original
    /// `midjourney` name when the feature was generalized.
    #[serde(rename = "midjourney")]
    Drawing,
    #[serde(rename = "task")]
    AsyncTask,
    #[serde(rename = "setting")]
    Settings,
    Login,
    Register,
}

impl NavKey {
    /// Canonical string form of the key, as used in serialized payloads and
    /// activation callbacks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Pricing => "pricing",
            Self::Chat => "chat",
            Self::Channel => "channel",
            Self::Redemption => "redemption",
            Self::UserManagement => "user",
            Self::Token => "token",
            Self::TopUp => "topup",
            Self::Log => "log",
            Self::Detail => "detail",
            Self::Drawing => "midjourney",
            Self::AsyncTask => "task",
            Self::Settings => "setting",
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavKey {
    type Err = ParseNavKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "pricing" => Ok(Self::Pricing),
            "chat" => Ok(Self::Chat),
            "channel" => Ok(Self::Channel),
            "redemption" => Ok(Self::Redemption),
            "user" => Ok(Self::UserManagement),
            "token" => Ok(Self::Token),
            "topup" => Ok(Self::TopUp),
            "log" => Ok(Self::Log),
            "detail" => Ok(Self::Detail),
            "midjourney" => Ok(Self::Drawing),
            "task" => Ok(Self::AsyncTask),
            "setting" => Ok(Self::Settings),
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            _ => Err(ParseNavKeyError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNavKeyError;

impl fmt::Display for ParseNavKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown navigation key")
    }
}

impl Error for ParseNavKeyError {}

/// Opaque presentational handle for an entry's icon.
///
/// Renderers map these to whatever glyph set they ship; the policy layer
/// only guarantees which handle belongs to which entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    PriceTag,
    Comment,
    Layers,
    Gift,
    User,
    Key,
    CreditCard,
    Histogram,
    CalendarClock,
    Image,
    Checklist,
    Setting,
}

/// A single item in the console's navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Stable key, used to match activations back to this entry.
    pub key: NavKey,
    /// Display text.
    pub label: String,
    /// Presentational icon handle.
    pub icon: NavIcon,
    /// Route path the entry navigates to (e.g., `/pricing`).
    pub target: String,
}

impl NavEntry {
    pub fn new(key: NavKey, label: impl Into<String>, icon: NavIcon, target: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            icon,
            target: target.into(),
        }
    }
}

/// Role attached to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Administrator,
}

/// Profile of a signed-in user, as cached by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display / login name. Also feeds the avatar initial and color.
    pub username: String,
    /// Role used for the administrator-only navigation entries.
    #[serde(default)]
    pub role: UserRole,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

/// Authentication state of the current session.
///
/// Absence of a profile is the anonymous state; a defaulted value is
/// therefore always unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The signed-in user, if any.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl SessionState {
    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for the given profile.
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True only for authenticated administrator sessions.
    pub fn is_administrator(&self) -> bool {
        matches!(
            self.user.as_ref().map(|user| user.role),
            Some(UserRole::Administrator)
        )
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

/// Console color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other scheme; used by the header's theme switch.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Status payload served by the backend at `/api/status`.
///
/// The console seeds its client-side flag storage from this payload on
/// startup, which is where the navigation policy's feature gates read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Branding name shown next to the logo.
    #[serde(default)]
    pub system_name: Option<String>,
    /// Logo image URL, when the operator configured one.
    #[serde(default)]
    pub logo: Option<String>,
    /// External chat URL; presence of a non-empty value shows the Chat entry.
    #[serde(default)]
    pub chat_link: Option<String>,
    /// Whether the usage dashboard is enabled for this deployment.
    #[serde(default)]
    pub enable_data_export: bool,
    /// Whether the drawing views are enabled for this deployment.
    #[serde(default)]
    pub enable_drawing: bool,
    /// Whether the async task views are enabled for this deployment.
    #[serde(default)]
    pub enable_task: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_key_string_round_trip() {
        let keys = [
            NavKey::Home,
            NavKey::Pricing,
            NavKey::Chat,
            NavKey::Channel,
            NavKey::Redemption,
            NavKey::UserManagement,
            NavKey::Token,
            NavKey::TopUp,
            NavKey::Log,
            NavKey::Detail,
            NavKey::Drawing,
            NavKey::AsyncTask,
            NavKey::Settings,
            NavKey::Login,
            NavKey::Register,
        ];
        for key in keys {
            let parsed: NavKey = key.as_str().parse().expect("parse canonical key");
            assert_eq!(parsed, key);
        }
        assert_eq!("nonsense".parse::<NavKey>(), Err(ParseNavKeyError));
    }

    #[test]
    fn nav_key_serde_matches_canonical_form() {
        let json = serde_json::to_string(&NavKey::Drawing).expect("serialize key");
        assert_eq!(json, "\"midjourney\"");
        let back: NavKey = serde_json::from_str("\"setting\"").expect("deserialize key");
        assert_eq!(back, NavKey::Settings);
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(!session.is_administrator());
        assert!(session.username().is_none());
    }

    #[test]
    fn administrator_requires_role() {
        let plain = SessionState::signed_in(UserProfile::new("alice", UserRole::User));
        assert!(plain.is_authenticated());
        assert!(!plain.is_administrator());

        let admin = SessionState::signed_in(UserProfile::new("root", UserRole::Administrator));
        assert!(admin.is_administrator());
    }

    #[test]
    fn profile_role_defaults_on_deserialize() {
        let profile: UserProfile = serde_json::from_str(r#"{"username": "alice"}"#).expect("deserialize profile");
        assert_eq!(profile.role, UserRole::User);
    }

    #[test]
    fn status_payload_tolerates_sparse_json() {
        let status: StatusPayload = serde_json::from_str(r#"{"system_name": "My Portal"}"#).expect("deserialize status");
        assert_eq!(status.system_name.as_deref(), Some("My Portal"));
        assert!(status.logo.is_none());
        assert!(!status.enable_data_export);
        assert!(!status.enable_task);
    }

    #[test]
    fn theme_toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
