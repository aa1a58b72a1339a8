//! Inventory pipeline for the SD-WAN controller reports.
//!
//! The flow is linear: a [`SessionProvider`] feeds the
//! [loader](loader::load_inventory), which builds keyed lookup tables;
//! the [joiner](join::build_records) flattens them into one record per
//! hardware serial; the [report](report) module serializes the records
//! to CSV. The [domains](domains::resolve_domains) resolver is a pure
//! function used only by the extended (domain-aware) report variant.

pub mod domains;
pub mod join;
pub mod loader;
pub mod report;
pub mod source;

pub use join::{InventoryRecord, ReportVariant, UNBOUND_SITE_ID, build_records};
pub use loader::{CollectionCounts, Inventory, load_inventory};
pub use report::{ReportError, report_filename, write_report, write_report_file};
pub use source::SessionProvider;
