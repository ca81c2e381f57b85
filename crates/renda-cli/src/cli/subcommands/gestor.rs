use clap::Subcommand;

/// Manager identity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GestorCommands {
    /// Register the manager name used to attribute edits.
    Login { nome: String },
    /// Forget the registered manager name.
    Logout,
    /// Show the registered manager name, if any.
    Status,
}
