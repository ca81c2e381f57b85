pub mod login;
pub mod logout;
pub mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GestorCommands;

/// Handle `rda gestor`.
pub fn handle(action: &GestorCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GestorCommands::Login { nome } => login::run(nome, flags),
        GestorCommands::Logout => logout::run(flags),
        GestorCommands::Status => status::run(flags),
    }
}
