// Controller API response types
//
// Models for the CloudGenix v2 REST API. Collection endpoints wrap their
// payload in `CollectionEnvelope<T>`. Fields use `#[serde(default)]`
// liberally because the API omits nulls inconsistently across versions.

use serde::{Deserialize, Serialize};

// ── Response envelope ────────────────────────────────────────────────

/// Standard collection envelope:
/// ```json
/// { "count": 3, "items": [ ... ] }
/// ```
/// A missing `items` array is treated as an empty collection.
#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

// ── Authentication ───────────────────────────────────────────────────

/// Response from `POST /v2.0/api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub x_auth_token: Option<String>,
}

/// Operator profile from `GET /v2.0/api/profile`.
///
/// Only used to resolve the tenant behind the active token.
#[derive(Debug, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tenant detail from `GET /v2.0/api/tenants/{id}`.
#[derive(Debug, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

// ── Machine ──────────────────────────────────────────────────────────

/// Hardware unit from the `machines` collection.
///
/// `sl_no` is the serial number and the primary inventory join key.
/// `em_element_id` is only meaningful once `machine_state` is `"claimed"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub sl_no: String,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub machine_state: Option<String>,
    #[serde(default)]
    pub ship_state: Option<String>,
    #[serde(default)]
    pub image_version: Option<String>,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub em_element_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Element ──────────────────────────────────────────────────────────

/// Configured network element from the `elements` collection.
///
/// Shares the serial-number key space with [`Machine`]; unclaimed
/// hardware has no corresponding element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub serial_number: String,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub connected: bool,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Site from the `sites` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub admin_state: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub service_binding: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Postal address attached to a site. Every field may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub street2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub post_code: Option<String>,
}

/// Geographic coordinates attached to a site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
}

// ── Service binding resources ────────────────────────────────────────

/// Service label from the `servicelabels` collection.
///
/// Labels of type [`TRANSIT_LABEL_TYPE`](crate::resources::TRANSIT_LABEL_TYPE)
/// participate in domain resolution; all others are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLabel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub label_type: String,
}

/// Service endpoint from the `serviceendpoints` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub id: String,
    #[serde(rename = "type")]
    pub endpoint_type: String,
    #[serde(default)]
    pub site_id: Option<String>,
}

/// Service binding map from the `servicebindingmaps` collection.
///
/// One entry per logical domain; `name` is the domain name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBindingMap {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub service_bindings: Vec<ServiceBinding>,
}

/// A single label-to-endpoints binding inside a [`ServiceBindingMap`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBinding {
    pub service_label_id: String,
    #[serde(default)]
    pub service_endpoint_ids: Vec<String>,
}
