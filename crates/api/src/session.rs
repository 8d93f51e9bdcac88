//! Session lifecycle over the Portal backend.
//!
//! The header never talks HTTP itself; it consumes a [`SessionProvider`]
//! and rebuilds its entry list from whatever session snapshot the provider
//! reports. The HTTP implementation here owns the cached [`SessionState`]
//! and keeps it in sync with the backend's cookie session.

use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use portal_types::{SessionState, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PortalClient;

/// Response envelope used by every Portal backend endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Human-readable failure reason; empty on success.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload, when the endpoint returns one.
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Source of the current session and its lifecycle operations.
///
/// `session()` is a cheap snapshot the policy can call on every rebuild.
/// The async operations drive the backend; the policy itself never awaits
/// them, only the surrounding application shell does.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Snapshot of the current session.
    fn session(&self) -> SessionState;

    /// Authenticate against the backend and cache the resulting profile.
    async fn login(&self, username: &str, password: &str) -> Result<SessionState>;

    /// End the backend session. On success the cached session becomes
    /// anonymous; on failure the cached session is left untouched and the
    /// caller decides what to surface.
    async fn logout(&self) -> Result<()>;
}

/// [`SessionProvider`] backed by the Portal backend's cookie session.
pub struct HttpSessionProvider {
    client: PortalClient,
    state: Mutex<SessionState>,
}

impl HttpSessionProvider {
    /// Create a provider with an anonymous session.
    pub fn new(client: PortalClient) -> Self {
        Self::restored(client, SessionState::anonymous())
    }

    /// Create a provider seeded with a previously cached session, e.g. one
    /// persisted by the application shell across restarts.
    pub fn restored(client: PortalClient, session: SessionState) -> Self {
        Self {
            client,
            state: Mutex::new(session),
        }
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    fn session(&self) -> SessionState {
        self.state.lock().expect("session lock poisoned").clone()
    }

    async fn login(&self, username: &str, password: &str) -> Result<SessionState> {
        let response = self
            .client
            .request(reqwest::Method::POST, "/api/user/login")
            .json(&LoginRequest { username, password })
            .send()
            .await
            .context("send login request")?;

        let envelope: ApiEnvelope<UserProfile> = response.json().await.context("decode login response")?;
        if !envelope.success {
            bail!("login rejected: {}", envelope.message);
        }
        let profile = envelope.data.context("login response missing profile")?;

        let session = SessionState::signed_in(profile);
        *self.state.lock().expect("session lock poisoned") = session.clone();
        Ok(session)
    }

    async fn logout(&self) -> Result<()> {
        let response = self
            .client
            .request(reqwest::Method::GET, "/api/user/logout")
            .send()
            .await
            .context("send logout request")?;

        let envelope: ApiEnvelope<serde_json::Value> = response.json().await.context("decode logout response")?;
        if !envelope.success {
            bail!("logout rejected: {}", envelope.message);
        }

        debug!("session ended");
        *self.state.lock().expect("session lock poisoned") = SessionState::anonymous();
        Ok(())
    }
}

/// In-process [`SessionProvider`] used by tests and previews.
///
/// Login always succeeds and signs in the requested username with the
/// default role; logout always succeeds.
pub struct StaticSessionProvider {
    state: Mutex<SessionState>,
}

impl StaticSessionProvider {
    pub fn new(session: SessionState) -> Self {
        Self {
            state: Mutex::new(session),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    fn session(&self) -> SessionState {
        self.state.lock().expect("session lock poisoned").clone()
    }

    async fn login(&self, username: &str, _password: &str) -> Result<SessionState> {
        let session = SessionState::signed_in(UserProfile::new(username, Default::default()));
        *self.state.lock().expect("session lock poisoned") = session.clone();
        Ok(session)
    }

    async fn logout(&self) -> Result<()> {
        *self.state.lock().expect("session lock poisoned") = SessionState::anonymous();
        Ok(())
    }
}
