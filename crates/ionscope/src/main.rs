// ionscope: standard inventory report.
//
// Authenticates against the controller (full credential chain including
// the interactive prompt), joins machines/elements/sites, and writes
// one CSV into the working directory.

use clap::Parser;
use secrecy::SecretString;

use ionscope_core::ReportVariant;

use ionscope::config::load_settings_or_default;
use ionscope::error::CliError;
use ionscope::login::{env_token, establish_session, resolve_credentials};
use ionscope::run;

/// Generate an SD-WAN hardware inventory CSV
#[derive(Debug, Parser)]
#[command(name = "ionscope", version, about)]
struct Cli {
    /// Controller URI, e.g. https://api.cloudgenix.com
    #[arg(long, short = 'C')]
    controller: Option<String>,

    /// Disable TLS certificate and hostname verification
    #[arg(long, short = 'I')]
    insecure: bool,

    /// Use this email instead of prompting
    #[arg(long, short = 'E')]
    email: Option<String>,

    /// Use this password instead of prompting
    #[arg(long, short = 'P')]
    password: Option<String>,

    /// Verbose debug output, levels 0-2
    #[arg(long, short = 'D', default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=2))]
    debug: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    run::init_tracing(cli.debug);

    if let Err(err) = run_report(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn run_report(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings_or_default();

    let url = run::controller_url(cli.controller, &settings)?;
    println!(
        "ionscope inventory v{} ({url})",
        env!("CARGO_PKG_VERSION")
    );

    let session = run::build_session(url, cli.insecure)?;

    let credentials = resolve_credentials(
        cli.email,
        cli.password.map(SecretString::from),
        &settings,
        env_token(),
    );
    establish_session(&session, credentials).await?;

    let out_dir = std::env::current_dir()?;
    let summary = run::generate_report(&session, ReportVariant::Standard, &out_dir).await?;
    println!(
        "Wrote {} rows to {}",
        summary.rows,
        summary.output_path.display()
    );

    run::logout(&session).await;
    Ok(())
}
