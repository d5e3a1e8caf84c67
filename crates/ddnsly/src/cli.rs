//! Clap derive structures for the `ddnsly` CLI.
//!
//! Defines the command tree, global flags, and shared argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ddnsly_core::Equipment;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ddnsly -- manage DDNS client links from the command line
#[derive(Debug, Parser)]
#[command(
    name = "ddnsly",
    version,
    about = "Manage DDNS client links from the command line",
    long_about = "Inspect the seeded client roster, check candidate entries against\n\
        the validation rules, compute roster statistics, and open a client's\n\
        DDNS link in the browser.\n\n\
        The roster is seeded from the config file at startup; the interactive\n\
        dashboard (ddnsly-tui) is where clients are added, edited, and removed.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file path (defaults to the platform config directory)
    #[arg(long, env = "DDNSLY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DDNSLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// CLI-facing equipment values; maps onto the core enumeration.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EquipmentArg {
    Fortigate,
    Mikrotik,
    Pfsense,
    Unifi,
}

impl From<EquipmentArg> for Equipment {
    fn from(arg: EquipmentArg) -> Self {
        match arg {
            EquipmentArg::Fortigate => Equipment::Fortigate,
            EquipmentArg::Mikrotik => Equipment::Mikrotik,
            EquipmentArg::Pfsense => Equipment::Pfsense,
            EquipmentArg::Unifi => Equipment::Unifi,
        }
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect the client roster and check candidate entries
    #[command(alias = "c")]
    Clients(ClientsArgs),

    /// Open a client's DDNS link in the browser
    Open(OpenArgs),

    /// Roster statistics
    Stats,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── clients ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    /// List the seeded roster
    #[command(alias = "ls")]
    List,

    /// Show one client by id or name
    Get {
        /// Client id (UUID) or name
        client: String,
    },

    /// Check a candidate client against the validation rules
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Display name of the candidate
    #[arg(long)]
    pub name: Option<String>,

    /// DDNS address of the candidate (scheme optional)
    #[arg(long)]
    pub link: Option<String>,

    /// Network equipment behind the link
    #[arg(long)]
    pub equipment: Option<EquipmentArg>,
}

// ── open ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Client id (UUID) or name
    pub client: String,
}

// ── config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a starter config file with the example seeds
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,
}

// ── completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
