//! CLI error types with miette diagnostics.
//!
//! Maps core and config errors into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use ddnsly_config::ConfigError;
use ddnsly_core::RegistryError;

/// Exit codes the binary terminates with.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(dead_code)]
pub enum CliError {
    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(ddnsly::not_found),
        help("Run: ddnsly {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("invalid client: {messages}")]
    #[diagnostic(
        code(ddnsly::validation),
        help("Fix the listed fields and try again.")
    )]
    Invalid { messages: String },

    // ── External actions ─────────────────────────────────────────────

    #[error("could not open link {url}")]
    #[diagnostic(
        code(ddnsly::open_failed),
        help("Check that the address is correct and that a browser is available.")
    )]
    OpenFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(ddnsly::config))]
    Config(#[from] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to render config: {0}")]
    #[diagnostic(code(ddnsly::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Invalid { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── RegistryError → CliError mapping ─────────────────────────────────

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Invalid(errors) => CliError::Invalid {
                messages: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            },
            RegistryError::NotFound { id } => CliError::NotFound {
                resource_type: "client".into(),
                identifier: id.to_string(),
                list_command: "clients list".into(),
            },
        }
    }
}
