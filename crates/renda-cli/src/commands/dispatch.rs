use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Emissao { action } => commands::emissao::handle(action, ctx, flags).await,
        Commands::Stats => commands::stats::run(ctx, flags).await,
        Commands::Gestor { .. } => {
            unreachable!("gestor commands are pre-dispatched in main")
        }
    }
}
