// Resource collection endpoints
//
// One fetch per collection the inventory report consumes. All endpoints
// are tenant-scoped GETs returning the standard `{count, items}` envelope.

use tracing::debug;

use crate::error::Error;
use crate::models::{
    Element, Machine, ServiceBindingMap, ServiceEndpoint, ServiceLabel, Site,
};
use crate::session::ApiSession;

/// Service label/endpoint type that participates in domain resolution.
pub const TRANSIT_LABEL_TYPE: &str = "cg-transit";

impl ApiSession {
    /// List all hardware machines for the tenant.
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/machines`
    pub async fn machines(&self) -> Result<Vec<Machine>, Error> {
        let url = self.tenant_url("machines")?;
        debug!("listing machines");
        self.get_collection(url).await
    }

    /// List all configured elements for the tenant.
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/elements`
    pub async fn elements(&self) -> Result<Vec<Element>, Error> {
        let url = self.tenant_url("elements")?;
        debug!("listing elements");
        self.get_collection(url).await
    }

    /// List all sites for the tenant.
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/sites`
    pub async fn sites(&self) -> Result<Vec<Site>, Error> {
        let url = self.tenant_url("sites")?;
        debug!("listing sites");
        self.get_collection(url).await
    }

    /// List service labels (domain resolution input).
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/servicelabels`
    pub async fn service_labels(&self) -> Result<Vec<ServiceLabel>, Error> {
        let url = self.tenant_url("servicelabels")?;
        debug!("listing service labels");
        self.get_collection(url).await
    }

    /// List service endpoints (domain resolution input).
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/serviceendpoints`
    pub async fn service_endpoints(&self) -> Result<Vec<ServiceEndpoint>, Error> {
        let url = self.tenant_url("serviceendpoints")?;
        debug!("listing service endpoints");
        self.get_collection(url).await
    }

    /// List service binding maps (domain resolution input).
    ///
    /// `GET /v2.0/api/tenants/{tenant_id}/servicebindingmaps`
    pub async fn service_binding_maps(&self) -> Result<Vec<ServiceBindingMap>, Error> {
        let url = self.tenant_url("servicebindingmaps")?;
        debug!("listing service binding maps");
        self.get_collection(url).await
    }
}
