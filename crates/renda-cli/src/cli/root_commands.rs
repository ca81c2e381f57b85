use clap::Subcommand;

use crate::cli::subcommands::{EmissaoCommands, GestorCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Issuance records: list, inspect, edit, audit.
    Emissao {
        #[command(subcommand)]
        action: EmissaoCommands,
    },
    /// Manager identity for edit attribution.
    Gestor {
        #[command(subcommand)]
        action: GestorCommands,
    },
    /// Aggregate dashboard: totals, per-type breakdown, monthly evolution.
    Stats,
}
