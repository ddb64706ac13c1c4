//! Clap derive structures for the `swview` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// swview -- inspect switch port, VLAN and route state
#[derive(Debug, Parser)]
#[command(
    name = "swview",
    version,
    about = "Inspect switch port, VLAN and route state",
    long_about = "Reads state exported by the switch agent and the transceiver service\n\
        and renders ports, VLAN membership, aggregate ports and route next-hops.",
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
    /// Switch profile to use
    #[arg(long, short = 'p', env = "SWVIEW_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SWVIEW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Agent state snapshot (overrides profile)
    #[arg(long, short = 'a', env = "SWVIEW_AGENT_SNAPSHOT", global = true)]
    pub agent_snapshot: Option<PathBuf>,

    /// Transceiver service snapshot (overrides profile)
    #[arg(long, env = "SWVIEW_TRANSCEIVER_SNAPSHOT", global = true)]
    pub transceiver_snapshot: Option<PathBuf>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "SWVIEW_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Keep going without transceiver data if the service fails
    #[arg(long, global = true)]
    pub continue_on_error: bool,

    /// Attempts per fetch before giving up
    #[arg(long, env = "SWVIEW_RETRIES", global = true)]
    pub retries: Option<u32>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one record per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show port admin/link state, transceiver presence and speed
    #[command(alias = "port")]
    Ports(PortsArgs),

    /// Show VLAN membership grouped by root port
    #[command(alias = "vlan")]
    Vlans(VlansArgs),

    /// Show which aggregate port owns each VLAN
    #[command(alias = "agg")]
    Aggregates,

    /// Show routes with resolved next-hops
    #[command(alias = "route")]
    Routes(RoutesArgs),

    /// Inspect the configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Ports ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PortsArgs {
    /// Only show these port ids
    pub ports: Vec<u32>,
}

// ── Vlans ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VlansArgs {
    /// Omit the speed annotation after each port
    #[arg(long)]
    pub no_details: bool,
}

// ── Routes ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Only show routes whose prefix matches exactly
    #[arg(long)]
    pub prefix: Option<String>,

    /// Show raw interface names instead of resolving ports
    #[arg(long)]
    pub raw_interfaces: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the merged configuration
    Show,
    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
