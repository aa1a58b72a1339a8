// Domain mapping resolver
//
// Cross-references service labels, service endpoints, and service binding
// maps into a per-site list of "<domain>_<label>" strings. Only labels
// and endpoints of the transit type participate; everything else is
// ignored. Used by the domain-aware report variant only.

use std::collections::HashMap;

use tracing::debug;

use ionscope_api::models::{ServiceBindingMap, ServiceEndpoint, ServiceLabel};
use ionscope_api::resources::TRANSIT_LABEL_TYPE;

/// Resolve the domain strings served by each hosting site.
///
/// Returns `site_id -> ["<domain-name>_<label-name>", ...]`. Accumulation
/// follows input iteration order and is not sorted; a site bound through
/// several binding maps collects one entry per binding. Endpoint ids with
/// no known site mapping are skipped, never raised.
pub fn resolve_domains(
    labels: &[ServiceLabel],
    endpoints: &[ServiceEndpoint],
    binding_maps: &[ServiceBindingMap],
) -> HashMap<String, Vec<String>> {
    // Transit labels only: id -> name.
    let label_names: HashMap<&str, &str> = labels
        .iter()
        .filter(|l| l.label_type == TRANSIT_LABEL_TYPE)
        .map(|l| (l.id.as_str(), l.name.as_str()))
        .collect();

    // Transit endpoints only: id -> hosting site id.
    let endpoint_sites: HashMap<&str, &str> = endpoints
        .iter()
        .filter(|e| e.endpoint_type == TRANSIT_LABEL_TYPE)
        .filter_map(|e| e.site_id.as_deref().map(|site| (e.id.as_str(), site)))
        .collect();

    let mut domains: HashMap<String, Vec<String>> = HashMap::new();

    for map in binding_maps {
        for binding in &map.service_bindings {
            // Bindings on non-transit labels are irrelevant to domains.
            let Some(label_name) = label_names.get(binding.service_label_id.as_str()) else {
                continue;
            };

            for endpoint_id in &binding.service_endpoint_ids {
                let Some(site_id) = endpoint_sites.get(endpoint_id.as_str()) else {
                    debug!(endpoint_id, "endpoint has no hosting site, skipping");
                    continue;
                };

                domains
                    .entry((*site_id).to_owned())
                    .or_default()
                    .push(format!("{}_{label_name}", map.name));
            }
        }
    }

    domains
}
