// Session provider seam
//
// The loader consumes this trait rather than `ApiSession` directly so
// tests can substitute canned collections and simulated fetch failures.

use ionscope_api::models::{
    Element, Machine, ServiceBindingMap, ServiceEndpoint, ServiceLabel, Site,
};
use ionscope_api::{ApiSession, Error};

/// Read-only access to the controller collections the inventory needs.
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// Display name of the authenticated tenant, if known.
    fn tenant_name(&self) -> Option<String>;

    async fn machines(&self) -> Result<Vec<Machine>, Error>;
    async fn elements(&self) -> Result<Vec<Element>, Error>;
    async fn sites(&self) -> Result<Vec<Site>, Error>;
    async fn service_labels(&self) -> Result<Vec<ServiceLabel>, Error>;
    async fn service_endpoints(&self) -> Result<Vec<ServiceEndpoint>, Error>;
    async fn service_binding_maps(&self) -> Result<Vec<ServiceBindingMap>, Error>;
}

impl SessionProvider for ApiSession {
    fn tenant_name(&self) -> Option<String> {
        ApiSession::tenant_name(self)
    }

    async fn machines(&self) -> Result<Vec<Machine>, Error> {
        ApiSession::machines(self).await
    }

    async fn elements(&self) -> Result<Vec<Element>, Error> {
        ApiSession::elements(self).await
    }

    async fn sites(&self) -> Result<Vec<Site>, Error> {
        ApiSession::sites(self).await
    }

    async fn service_labels(&self) -> Result<Vec<ServiceLabel>, Error> {
        ApiSession::service_labels(self).await
    }

    async fn service_endpoints(&self) -> Result<Vec<ServiceEndpoint>, Error> {
        ApiSession::service_endpoints(self).await
    }

    async fn service_binding_maps(&self) -> Result<Vec<ServiceBindingMap>, Error> {
        ApiSession::service_binding_maps(self).await
    }
}
