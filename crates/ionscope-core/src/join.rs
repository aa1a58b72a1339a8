// Inventory joiner
//
// Flattens the loader's lookup tables into one record per observed
// serial number. Missing associations (unclaimed hardware, unbound or
// unknown sites, absent addresses) resolve to sentinel defaults -- a
// lookup miss is never an error here.

use crate::loader::Inventory;

/// Site id value that marks an element as not bound to any real site.
///
/// TODO: confirm against the API contract that "1" is a platform
/// invariant rather than a tenant artifact.
pub const UNBOUND_SITE_ID: &str = "1";

/// Default site name when an element resolves to no real site.
pub const UNBOUND_SITE_NAME: &str = "Unbound";

/// Default element name for hardware with no element association.
pub const UNCLAIMED_ELEMENT_NAME: &str = "Unclaimed";

/// Which report is being produced. The variants differ in their
/// missing-value sentinel, their column set, and whether domains are
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    /// Plain inventory: "n/a" sentinels, no connectivity or domain columns.
    Standard,
    /// Extended inventory: "-" sentinels, adds `connected` and `domain`.
    WithDomains,
}

impl ReportVariant {
    /// Sentinel written for any field whose association is missing.
    pub fn missing_value(self) -> &'static str {
        match self {
            Self::Standard => "n/a",
            Self::WithDomains => "-",
        }
    }
}

/// One flat output row. All fields are pre-rendered strings; the report
/// module only selects and orders them per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub serial_number: String,
    pub model_name: String,
    pub model_type: String,
    pub software_version: String,
    pub connected: String,
    pub site_name: String,
    pub site_state: String,
    pub domain: String,
    pub element_name: String,
    pub element_role: String,
    pub element_state: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub post_code: String,
    pub longitude: String,
    pub latitude: String,
}

/// Classify a model name as virtual or physical.
///
/// Substring heuristic carried over from the platform's naming scheme
/// ("ion 7000v" and friends): any model name containing a `v` counts as
/// virtual, everything else as physical. Known to misclassify
/// hypothetical names like "vm-ion"; reproduced as-is.
pub fn model_type(model_name: &str) -> &'static str {
    if model_name.contains('v') {
        "Virtual"
    } else {
        "Physical"
    }
}

/// Join the lookup tables into output records, one per observed serial,
/// in first-seen order.
pub fn build_records(inventory: &Inventory, variant: ReportVariant) -> Vec<InventoryRecord> {
    inventory
        .observed
        .iter()
        .filter_map(|serial| {
            inventory
                .machines
                .get(serial)
                .map(|machine| join_one(inventory, serial, machine, variant))
        })
        .collect()
}

fn join_one(
    inventory: &Inventory,
    serial: &str,
    machine: &crate::loader::MachineRecord,
    variant: ReportVariant,
) -> InventoryRecord {
    let missing = variant.missing_value();
    let model_name = machine.model_name.clone().unwrap_or_default();

    let mut record = InventoryRecord {
        serial_number: serial.to_owned(),
        model_type: model_type(&model_name).to_owned(),
        model_name,
        software_version: machine
            .software_version
            .clone()
            .unwrap_or_else(|| missing.to_owned()),
        connected: machine.connected.to_string(),
        site_name: UNBOUND_SITE_NAME.to_owned(),
        site_state: missing.to_owned(),
        domain: missing.to_owned(),
        element_name: UNCLAIMED_ELEMENT_NAME.to_owned(),
        element_role: missing.to_owned(),
        element_state: missing.to_owned(),
        street: missing.to_owned(),
        city: missing.to_owned(),
        state: missing.to_owned(),
        country: missing.to_owned(),
        post_code: missing.to_owned(),
        longitude: missing.to_owned(),
        latitude: missing.to_owned(),
    };

    let Some(element) = inventory.elements.get(serial) else {
        // Unclaimed hardware keeps every element- and site-derived default.
        return record;
    };

    record.software_version = element.software_version.clone().unwrap_or_default();
    record.connected = element.connected.to_string();
    record.element_name = element.name.clone().unwrap_or_default();
    record.element_role = element.role.clone().unwrap_or_default();
    record.element_state = element.state.clone().unwrap_or_default();

    let Some(site_id) = element.site_id.as_deref() else {
        return record;
    };
    // The unbound sentinel must never be resolved, even if a site with
    // that id exists in the table.
    if site_id == UNBOUND_SITE_ID {
        return record;
    }
    let Some(site) = inventory.sites.get(site_id) else {
        return record;
    };

    record.site_name = site.name.clone();
    record.site_state = site.admin_state.clone().unwrap_or_default();

    if let Some(address) = &site.address {
        // Street is the two sub-fields joined by a space, nulls as empty
        // strings -- trailing/leading spaces and all.
        record.street = format!(
            "{} {}",
            address.street.clone().unwrap_or_default(),
            address.street2.clone().unwrap_or_default()
        );
        record.city = address.city.clone().unwrap_or_default();
        record.state = address.state.clone().unwrap_or_default();
        record.country = address.country.clone().unwrap_or_default();
        record.post_code = address.post_code.clone().unwrap_or_default();
    }

    if let Some(location) = &site.location {
        record.longitude = location
            .longitude
            .map(|v| v.to_string())
            .unwrap_or_default();
        record.latitude = location.latitude.map(|v| v.to_string()).unwrap_or_default();
    }

    if let Some(domains) = inventory.domains.get(site_id) {
        record.domain = domains.join("; ");
    }

    record
}
