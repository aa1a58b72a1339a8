// Resource loader
//
// Fetches the controller collections and normalizes them into lookup
// tables keyed by serial number (machines, elements) and site id (sites).
// Fetch failures are logged and leave the affected table empty -- the
// report is best-effort by design and never aborts on a partial failure.

use std::collections::{HashMap, HashSet};

use tracing::{error, info};

use ionscope_api::models::{Address, Element, Location, Machine, Site};

use crate::domains::resolve_domains;
use crate::source::SessionProvider;

/// Normalized machine row, keyed by serial number.
///
/// Carries only the machine-level fields the joiner reads; element
/// association happens through the shared serial key, not the machine's
/// own element pointer.
#[derive(Debug, Clone)]
pub struct MachineRecord {
    pub model_name: Option<String>,
    pub software_version: Option<String>,
    pub connected: bool,
}

/// Normalized element row, keyed by serial number.
#[derive(Debug, Clone)]
pub struct ElementRecord {
    pub site_id: Option<String>,
    pub software_version: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub state: Option<String>,
    pub connected: bool,
}

/// Normalized site row, keyed by site id.
#[derive(Debug, Clone)]
pub struct SiteRecord {
    pub name: String,
    pub admin_state: Option<String>,
    pub address: Option<Address>,
    pub location: Option<Location>,
}

/// Raw item counts per fetched collection (zero after a failed fetch).
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionCounts {
    pub machines: usize,
    pub elements: usize,
    pub sites: usize,
}

/// In-memory lookup tables for one report run.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Serial numbers in first-seen machine order, deduplicated.
    pub observed: Vec<String>,
    pub machines: HashMap<String, MachineRecord>,
    pub elements: HashMap<String, ElementRecord>,
    pub sites: HashMap<String, SiteRecord>,
    /// Site id -> domain strings; empty unless domain resolution ran.
    pub domains: HashMap<String, Vec<String>>,
    pub counts: CollectionCounts,
}

/// Fetch and normalize all collections for one report run.
///
/// `with_domains` additionally fetches the three service collections and
/// resolves the per-site domain mapping. Every fetch is independent: a
/// failure is logged and its table stays empty.
pub async fn load_inventory<S: SessionProvider>(session: &S, with_domains: bool) -> Inventory {
    let mut inventory = Inventory::default();

    match session.machines().await {
        Ok(items) => {
            inventory.counts.machines = items.len();
            info!(count = items.len(), "machines retrieved");
            (inventory.observed, inventory.machines) = index_machines(items);
        }
        Err(e) => error!(error = %e, "failed to retrieve machines"),
    }

    match session.elements().await {
        Ok(items) => {
            inventory.counts.elements = items.len();
            info!(count = items.len(), "elements retrieved");
            inventory.elements = index_elements(items);
        }
        Err(e) => error!(error = %e, "failed to retrieve elements"),
    }

    match session.sites().await {
        Ok(items) => {
            inventory.counts.sites = items.len();
            info!(count = items.len(), "sites retrieved");
            inventory.sites = index_sites(items);
        }
        Err(e) => error!(error = %e, "failed to retrieve sites"),
    }

    if with_domains {
        let labels = match session.service_labels().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "failed to retrieve service labels");
                Vec::new()
            }
        };
        let endpoints = match session.service_endpoints().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "failed to retrieve service endpoints");
                Vec::new()
            }
        };
        let binding_maps = match session.service_binding_maps().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "failed to retrieve service binding maps");
                Vec::new()
            }
        };
        inventory.domains = resolve_domains(&labels, &endpoints, &binding_maps);
    }

    inventory
}

/// Index machines by serial, preserving first-seen order without duplicates.
fn index_machines(items: Vec<Machine>) -> (Vec<String>, HashMap<String, MachineRecord>) {
    let mut observed = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();
    let mut machines = HashMap::with_capacity(items.len());

    for machine in items {
        if seen.insert(machine.sl_no.clone()) {
            observed.push(machine.sl_no.clone());
        }

        machines.insert(
            machine.sl_no,
            MachineRecord {
                model_name: machine.model_name,
                software_version: machine.image_version,
                connected: machine.connected,
            },
        );
    }

    (observed, machines)
}

fn index_elements(items: Vec<Element>) -> HashMap<String, ElementRecord> {
    items
        .into_iter()
        .map(|element| {
            (
                element.serial_number,
                ElementRecord {
                    site_id: element.site_id,
                    software_version: element.software_version,
                    name: element.name,
                    role: element.role,
                    state: element.state,
                    connected: element.connected,
                },
            )
        })
        .collect()
}

fn index_sites(items: Vec<Site>) -> HashMap<String, SiteRecord> {
    items
        .into_iter()
        .map(|site| {
            (
                site.id,
                SiteRecord {
                    name: site.name,
                    admin_state: site.admin_state,
                    address: site.address,
                    location: site.location,
                },
            )
        })
        .collect()
}
