// Controller HTTP session
//
// Wraps `reqwest::Client` with controller-specific URL construction,
// auth-token header injection, and collection envelope unwrapping. The
// endpoint surface (machines, elements, sites, service resources) lives
// in `resources.rs` as inherent methods so this module stays focused on
// transport mechanics; login flows live in `auth.rs`.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::CollectionEnvelope;
use crate::transport::TransportConfig;

/// Default production controller.
pub const DEFAULT_CONTROLLER: &str = "https://api.cloudgenix.com";

/// API version prefix for every endpoint used by this client.
const API_VERSION: &str = "v2.0";

/// Tenant context resolved during login.
#[derive(Debug, Clone)]
pub(crate) struct TenantContext {
    pub id: String,
    pub name: String,
}

/// Authenticated session with an SD-WAN controller.
///
/// Construct with [`ApiSession::new`], then authenticate with
/// [`login_with_token`](ApiSession::login_with_token) or
/// [`login_with_credentials`](ApiSession::login_with_credentials) before
/// calling any tenant-scoped fetch. All fetches return the unwrapped
/// `items` payload -- the envelope is stripped before the caller sees it.
pub struct ApiSession {
    http: reqwest::Client,
    base_url: Url,
    /// Auth token sent as `x-auth-token` on every request once set.
    /// Stored behind a lock because credential login acquires it mid-flow.
    token: RwLock<Option<SecretString>>,
    tenant: RwLock<Option<TenantContext>>,
}

impl ApiSession {
    /// Create a new session from a controller URL and transport config.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
            tenant: RwLock::new(None),
        })
    }

    /// Create a session with a pre-built `reqwest::Client` (tests).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: RwLock::new(None),
            tenant: RwLock::new(None),
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The authenticated tenant's display name, if logged in.
    pub fn tenant_name(&self) -> Option<String> {
        self.tenant
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.name.clone()))
    }

    /// The authenticated tenant's identifier, if logged in.
    pub fn tenant_id(&self) -> Option<String> {
        self.tenant
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.id.clone()))
    }

    // ── Auth state (used by auth.rs) ─────────────────────────────────

    pub(crate) fn set_token(&self, token: SecretString) {
        debug!("storing auth token");
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    pub(crate) fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    pub(crate) fn set_tenant(&self, tenant: TenantContext) {
        if let Ok(mut guard) = self.tenant.write() {
            *guard = Some(tenant);
        }
    }

    /// Apply the stored auth token to a request builder.
    fn apply_token(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read() {
            Ok(guard) => match guard.as_ref() {
                Some(token) => builder.header("x-auth-token", token.expose_secret()),
                None => builder,
            },
            Err(_) => builder,
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a controller-level URL: `{base}/v2.0/api/{path}`
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{API_VERSION}/api/{path}")).map_err(Error::InvalidUrl)
    }

    /// Build a tenant-scoped URL: `{base}/v2.0/api/tenants/{tenant_id}/{path}`
    ///
    /// Every resource collection is tenant-scoped; fails with
    /// [`Error::NotLoggedIn`] before authentication.
    pub(crate) fn tenant_url(&self, path: &str) -> Result<Url, Error> {
        let tenant_id = self.tenant_id().ok_or(Error::NotLoggedIn)?;
        self.api_url(&format!("tenants/{tenant_id}/{path}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a collection endpoint and unwrap its `items`.
    pub(crate) async fn get_collection<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);
        let resp = self
            .apply_token(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;
        let envelope: CollectionEnvelope<T> = Self::parse_body(resp).await?;
        Ok(envelope.items)
    }

    /// GET a singleton endpoint (profile, tenant detail).
    pub(crate) async fn get_object<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self
            .apply_token(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_body(resp).await
    }

    /// POST a JSON body and decode the response object.
    pub(crate) async fn post_object<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self
            .apply_token(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_body(resp).await
    }

    /// Check the HTTP status and decode the JSON body.
    ///
    /// 401 is always an authentication failure; other non-success statuses
    /// surface as [`Error::Api`] with a truncated body for context.
    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "token rejected or session expired".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = preview(&body);
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

/// Truncate a response body for error messages, never splitting a
/// multibyte character.
fn preview(body: &str) -> &str {
    const PREVIEW_LIMIT: usize = 200;
    if body.len() <= PREVIEW_LIMIT {
        return body;
    }
    let mut end = PREVIEW_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
