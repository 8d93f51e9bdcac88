//! Portal backend client utilities.
//!
//! This crate provides a lightweight client for the Portal console's own
//! backend. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults (JSON accept
//!   header, cookie jar for the session cookie, request timeout)
//! - Validating `PORTAL_API_BASE` for safety
//! - Building requests with a consistent User-Agent
//! - The [`session::SessionProvider`] seam the header consumes for
//!   login/logout and session snapshots
//!
//! The primary entry point is [`PortalClient`]. Create an instance via
//! [`PortalClient::new_from_env`], and then build requests with
//! [`PortalClient::request`].

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, Url, header};
use tracing::debug;

pub mod session;

pub use session::{ApiEnvelope, HttpSessionProvider, SessionProvider, StaticSessionProvider};

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "PORTAL_API_BASE";

/// Base URL used when `PORTAL_API_BASE` is unset; matches the backend's
/// development default.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Hostnames allowed to use plain HTTP for local development.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Thin wrapper around a configured `reqwest::Client` for Portal backend
/// access.
///
/// The client pre-configures default headers, keeps the backend's session
/// cookie in an internal jar, and builds requests against a validated base
/// URL.
#[derive(Debug, Clone)]
pub struct PortalClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl PortalClient {
    /// Construct a [`PortalClient`] from the environment.
    ///
    /// The base URL is taken from `PORTAL_API_BASE` (if set) or falls back
    /// to the development default. Non-localhost hosts must use HTTPS;
    /// Portal deployments are self-hosted, so no host allowlist applies
    /// beyond the scheme requirement.
    pub fn new_from_env() -> Result<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;

        let base_url = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.into());
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("portal-console/0.1; {}", env::consts::OS),
        })
    }

    /// Build a `reqwest::RequestBuilder` for a method and backend-relative
    /// path.
    ///
    /// The resulting request includes the configured User-Agent and base
    /// headers, and is resolved relative to `self.base_url`.
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("Invalid PORTAL_API_BASE URL '{}': {}", base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("PORTAL_API_BASE must include a host"))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "PORTAL_API_BASE must use https for non-localhost hosts; got '{}://'",
            parsed_base_url.scheme()
        ));
    }

    Ok(())
}
