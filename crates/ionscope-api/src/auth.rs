// Session authentication
//
// Token and email/password login against the controller, plus logout.
// Both login paths end by resolving the tenant context (id + display
// name) so callers can build tenant-scoped URLs and name the report.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::models::{LoginResponse, Profile, Tenant};
use crate::session::{ApiSession, TenantContext};

impl ApiSession {
    /// Authenticate with a static auth token.
    ///
    /// Stores the token for the `x-auth-token` header and verifies it by
    /// resolving the tenant context. A rejected token surfaces as
    /// [`Error::Authentication`] and clears the stored token.
    pub async fn login_with_token(&self, token: SecretString) -> Result<(), Error> {
        self.set_token(token);
        match self.resolve_tenant().await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.clear_token();
                Err(e)
            }
        }
    }

    /// Authenticate with email and password.
    ///
    /// `POST /v2.0/api/login` returns a session token, which is then used
    /// exactly like a static token.
    pub async fn login_with_credentials(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<(), Error> {
        let url = self.api_url("login")?;
        debug!("logging in at {}", url);

        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let resp: LoginResponse = self.post_object(url, &body).await?;
        let token = resp.x_auth_token.ok_or_else(|| Error::Authentication {
            message: "login response did not include a session token".into(),
        })?;

        self.login_with_token(SecretString::from(token)).await
    }

    /// End the current session. Advisory -- a failed logout is reported
    /// to the caller but the session is unusable either way.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("logout")?;
        debug!("logging out at {}", url);
        let _: serde_json::Value = self.get_object(url).await?;
        self.clear_token();
        Ok(())
    }

    /// Resolve the tenant behind the active token.
    ///
    /// `GET /v2.0/api/profile` yields the tenant id;
    /// `GET /v2.0/api/tenants/{id}` yields the display name.
    async fn resolve_tenant(&self) -> Result<(), Error> {
        let profile: Profile = self.get_object(self.api_url("profile")?).await?;

        let tenant_id = profile.tenant_id.ok_or_else(|| Error::Authentication {
            message: "profile response carried no tenant id".into(),
        })?;

        let tenant: Tenant = self
            .get_object(self.api_url(&format!("tenants/{tenant_id}"))?)
            .await?;

        debug!(tenant = %tenant.name, "tenant context resolved");
        self.set_tenant(TenantContext {
            id: tenant.id,
            name: tenant.name,
        });
        Ok(())
    }
}
