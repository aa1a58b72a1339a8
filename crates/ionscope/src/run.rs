//! The report pipeline shared by both binaries: build a session, load
//! the collections, join, write the CSV, log out.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use url::Url;

use ionscope_api::session::DEFAULT_CONTROLLER;
use ionscope_api::{ApiSession, TlsMode, TransportConfig};
use ionscope_core::{
    ReportVariant, SessionProvider, build_records, load_inventory, report_filename,
    write_report_file,
};

use crate::config::Settings;
use crate::error::CliError;

/// Setup tracing from the `--debug 0..=2` verbosity ladder.
pub fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

/// Pick the controller URL: CLI flag > settings file > production default.
pub fn controller_url(cli_controller: Option<String>, settings: &Settings) -> Result<Url, CliError> {
    let url_str = cli_controller
        .or_else(|| settings.controller.clone())
        .unwrap_or_else(|| DEFAULT_CONTROLLER.to_owned());

    url_str.parse().map_err(|_| CliError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL: {url_str}"),
    })
}

/// Build an unauthenticated session for the given controller.
pub fn build_session(url: Url, insecure: bool) -> Result<ApiSession, CliError> {
    let transport = TransportConfig {
        tls: if insecure {
            TlsMode::DangerAcceptInvalid
        } else {
            TlsMode::System
        },
        timeout: Duration::from_secs(30),
    };
    Ok(ApiSession::new(url, &transport)?)
}

/// Outcome of one report run.
pub struct RunSummary {
    pub output_path: PathBuf,
    pub rows: usize,
}

/// Load, join, and write one report into `out_dir`.
///
/// Collection fetches are best-effort (failures already logged by the
/// loader); only writing the output file can fail here.
pub async fn generate_report<S: SessionProvider>(
    session: &S,
    variant: ReportVariant,
    out_dir: &Path,
) -> Result<RunSummary, CliError> {
    let inventory = load_inventory(session, variant == ReportVariant::WithDomains).await;

    println!("\tMachines: {}", inventory.counts.machines);
    println!("\tElements: {}", inventory.counts.elements);
    println!("\tSites: {}", inventory.counts.sites);

    let records = build_records(&inventory, variant);

    let tenant = session.tenant_name().unwrap_or_else(|| "tenant".to_owned());
    let output_path = out_dir.join(report_filename(&tenant, Utc::now()));
    write_report_file(&output_path, variant, &records)?;

    Ok(RunSummary {
        rows: records.len(),
        output_path,
    })
}

/// End the session; logout failures are advisory only.
pub async fn logout(session: &ApiSession) {
    println!("Logging out.");
    if let Err(e) = session.logout().await {
        warn!(error = %e, "logout failed");
    }
}
