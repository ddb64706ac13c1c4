//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use swview_config::ConfigError;
use swview_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const INVALID_DATA: i32 = 6;
    pub const UNAVAILABLE: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Sources ──────────────────────────────────────────────────────

    #[error("No agent snapshot configured")]
    #[diagnostic(
        code(swview::no_source),
        help(
            "Pass --agent-snapshot <FILE>, or add a profile to {path}:\n\
             [profiles.default]\n\
             agent_snapshot = \"/path/to/agent.json\""
        )
    )]
    NoSource { path: String },

    #[error("Could not load snapshot {path}")]
    #[diagnostic(
        code(swview::snapshot),
        help("{reason}\nCheck that the file exists and holds a JSON export.")
    )]
    Snapshot { path: String, reason: String },

    #[error("Transceiver service unavailable")]
    #[diagnostic(
        code(swview::transceiver_unavailable),
        help("{reason}\nUse --continue-on-error to render without module data.")
    )]
    TransceiverUnavailable { reason: String },

    // ── Data ─────────────────────────────────────────────────────────

    #[error("Inconsistent switch state: {message}")]
    #[diagnostic(
        code(swview::invalid_data),
        help("The agent reported state that violates its own contract; re-export the snapshot.")
    )]
    InvalidData { message: String },

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(swview::not_found),
        help("Run: swview {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(swview::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(swview::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(swview::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

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
            Self::NoSource { .. } | Self::Validation { .. } | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidData { .. } => exit_code::INVALID_DATA,
            Self::Snapshot { .. } | Self::TransceiverUnavailable { .. } => exit_code::UNAVAILABLE,
            Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Snapshot { path, reason } => CliError::Snapshot { path, reason },

            CoreError::UnavailableTransceiverService { reason } => {
                CliError::TransceiverUnavailable { reason }
            }

            CoreError::PortNotFound { port_id } => CliError::NotFound {
                resource_type: "port".into(),
                identifier: port_id.to_string(),
                list_command: "ports".into(),
            },

            err @ (CoreError::InvalidAddress { .. }
            | CoreError::InvalidInterfaceName { .. }
            | CoreError::MultiVlanInvariantViolation { .. }
            | CoreError::UnresolvableRootPort { .. }
            | CoreError::MissingPortStatus { .. }) => CliError::InvalidData {
                message: err.to_string(),
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::ProfileNotFound { name, available } => CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            },
            ConfigError::Serialization(e) => CliError::Validation {
                field: "config".into(),
                reason: format!("failed to serialize config: {e}"),
            },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
