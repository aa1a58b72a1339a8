//! CLI error types with miette diagnostics.
//!
//! Maps api- and core-level failures into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for the report binaries.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(ionscope::auth_failed),
        help("Verify the auth token or login credentials for this tenant.")
    )]
    AuthFailed { message: String },

    #[error("No credentials available")]
    #[diagnostic(
        code(ionscope::no_credentials),
        help(
            "Provide an auth token via the settings file (auth_token) or the\n\
             X_AUTH_TOKEN / AUTH_TOKEN environment variables."
        )
    )]
    NoCredentials,

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the controller")]
    #[diagnostic(
        code(ionscope::connection_failed),
        help(
            "Check the controller URI and network path.\n\
             Self-signed lab controllers need --insecure (-I)."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller API error (HTTP {status}): {message}")]
    #[diagnostic(code(ionscope::api_error))]
    Api { status: u16, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ionscope::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Settings file could not be loaded")]
    #[diagnostic(code(ionscope::config))]
    Config(#[source] Box<figment::Error>),

    // ── Report output ────────────────────────────────────────────────
    #[error(transparent)]
    Report(#[from] ionscope_core::ReportError),

    // ── Interactive / IO ─────────────────────────────────────────────
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } | Self::NoCredentials => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── api Error → CliError mapping ─────────────────────────────────────

impl From<ionscope_api::Error> for CliError {
    fn from(err: ionscope_api::Error) -> Self {
        match err {
            ionscope_api::Error::Authentication { message } => CliError::AuthFailed { message },

            ionscope_api::Error::NotLoggedIn => CliError::AuthFailed {
                message: "session is not logged in".into(),
            },

            ionscope_api::Error::Transport(e) => CliError::ConnectionFailed { source: e.into() },

            ionscope_api::Error::Tls(message) => CliError::ConnectionFailed {
                source: message.into(),
            },

            ionscope_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "controller".into(),
                reason: e.to_string(),
            },

            ionscope_api::Error::Api { status, message } => CliError::Api { status, message },

            ionscope_api::Error::Deserialization { message, .. } => CliError::Api {
                status: 0,
                message: format!("unreadable response: {message}"),
            },
        }
    }
}
