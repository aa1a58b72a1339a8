// CSV report output
//
// Fixed per-variant headers, row ordering, and the generated output
// filename (tenant name + UTC timestamp). Column order is part of the
// report contract and must not change.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::join::{InventoryRecord, ReportVariant};

/// Report serialization failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column order for the standard inventory report.
pub const STANDARD_HEADER: [&str; 16] = [
    "serial_number",
    "model_name",
    "model_type",
    "software_version",
    "site_name",
    "element_name",
    "element_role",
    "site_state",
    "element_state",
    "street",
    "city",
    "state",
    "country",
    "post_code",
    "longitude",
    "latitude",
];

/// Column order for the domain-aware report: adds `connected` after
/// `model_type` and `domain` after `site_state`.
pub const DOMAINS_HEADER: [&str; 18] = [
    "serial_number",
    "model_name",
    "model_type",
    "connected",
    "software_version",
    "site_name",
    "element_name",
    "element_role",
    "site_state",
    "domain",
    "element_state",
    "street",
    "city",
    "state",
    "country",
    "post_code",
    "longitude",
    "latitude",
];

/// The header row for a variant.
pub fn header(variant: ReportVariant) -> &'static [&'static str] {
    match variant {
        ReportVariant::Standard => &STANDARD_HEADER,
        ReportVariant::WithDomains => &DOMAINS_HEADER,
    }
}

/// Select a record's fields in the variant's column order.
fn row(record: &InventoryRecord, variant: ReportVariant) -> Vec<&str> {
    match variant {
        ReportVariant::Standard => vec![
            &record.serial_number,
            &record.model_name,
            &record.model_type,
            &record.software_version,
            &record.site_name,
            &record.element_name,
            &record.element_role,
            &record.site_state,
            &record.element_state,
            &record.street,
            &record.city,
            &record.state,
            &record.country,
            &record.post_code,
            &record.longitude,
            &record.latitude,
        ],
        ReportVariant::WithDomains => vec![
            &record.serial_number,
            &record.model_name,
            &record.model_type,
            &record.connected,
            &record.software_version,
            &record.site_name,
            &record.element_name,
            &record.element_role,
            &record.site_state,
            &record.domain,
            &record.element_state,
            &record.street,
            &record.city,
            &record.state,
            &record.country,
            &record.post_code,
            &record.longitude,
            &record.latitude,
        ],
    }
}

/// Strip characters that would break a filename: spaces and path
/// separators.
pub fn sanitize_tenant_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '/' && *c != '\\')
        .collect()
}

/// Generated output filename:
/// `<tenant>_inventory_<YYYY-MM-DD_HH-MM-SS>.csv` (UTC).
pub fn report_filename(tenant_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}_inventory_{}.csv",
        sanitize_tenant_name(tenant_name),
        now.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Write the header and records to any writer.
pub fn write_report<W: Write>(
    writer: W,
    variant: ReportVariant,
    records: &[InventoryRecord],
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header(variant))?;
    for record in records {
        csv_writer.write_record(row(record, variant))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the report to a file path.
pub fn write_report_file(
    path: &Path,
    variant: ReportVariant,
    records: &[InventoryRecord],
) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_report(file, variant, records)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_record() -> InventoryRecord {
        InventoryRecord {
            serial_number: "SN-1".into(),
            model_name: "ion 3000".into(),
            model_type: "Physical".into(),
            software_version: "5.6.1".into(),
            connected: "true".into(),
            site_name: "Springfield DC".into(),
            site_state: "active".into(),
            domain: "Corp_east".into(),
            element_name: "branch-01".into(),
            element_role: "SPOKE".into(),
            element_state: "bound".into(),
            street: "Main St ".into(),
            city: "Springfield".into(),
            state: "".into(),
            country: "US".into(),
            post_code: "62704".into(),
            longitude: "-89.65".into(),
            latitude: "39.78".into(),
        }
    }

    #[test]
    fn filename_embeds_sanitized_tenant_and_utc_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 5).unwrap();
        assert_eq!(
            report_filename("Example Networks / EMEA", now),
            "ExampleNetworksEMEA_inventory_2024-06-15_10-30-05.csv"
        );
    }

    #[test]
    fn sanitize_strips_spaces_and_separators() {
        assert_eq!(sanitize_tenant_name("a b/c\\d"), "abcd");
        assert_eq!(sanitize_tenant_name("plain"), "plain");
    }

    #[test]
    fn standard_report_layout() {
        let mut buf = Vec::new();
        write_report(&mut buf, ReportVariant::Standard, &[sample_record()])
            .expect("write succeeds");
        let text = String::from_utf8(buf).expect("utf-8");
        let mut lines = text.lines();

        assert_eq!(
            lines.next().expect("header line"),
            STANDARD_HEADER.join(",")
        );
        let data = lines.next().expect("data line");
        assert!(data.starts_with("SN-1,ion 3000,Physical,5.6.1,Springfield DC"));
        // Standard variant carries neither connectivity nor domain.
        assert!(!data.contains("Corp_east"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn domain_report_includes_connected_and_domain_columns() {
        let mut buf = Vec::new();
        write_report(&mut buf, ReportVariant::WithDomains, &[sample_record()])
            .expect("write succeeds");
        let text = String::from_utf8(buf).expect("utf-8");
        let mut lines = text.lines();

        assert_eq!(lines.next().expect("header line"), DOMAINS_HEADER.join(","));
        let data = lines.next().expect("data line");
        assert!(data.contains(",true,"));
        assert!(data.contains("Corp_east"));
    }

    #[test]
    fn trailing_space_in_street_is_quoted_not_lost() {
        let mut buf = Vec::new();
        write_report(&mut buf, ReportVariant::Standard, &[sample_record()])
            .expect("write succeeds");
        let text = String::from_utf8(buf).expect("utf-8");

        // The csv crate quotes nothing here; the raw field keeps its space.
        assert!(text.contains("Main St ,Springfield"));
    }

    #[test]
    fn empty_record_set_still_writes_the_header() {
        let mut buf = Vec::new();
        write_report(&mut buf, ReportVariant::Standard, &[]).expect("write succeeds");
        let text = String::from_utf8(buf).expect("utf-8");
        assert_eq!(text.trim_end(), STANDARD_HEADER.join(","));
    }

    #[test]
    fn report_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");

        write_report_file(&path, ReportVariant::Standard, &[sample_record()])
            .expect("write succeeds");

        let text = std::fs::read_to_string(&path).expect("readable");
        assert_eq!(text.lines().count(), 2);
    }
}
