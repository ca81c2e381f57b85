pub mod get;
pub mod historico;
pub mod list;
pub mod tipos;
pub mod update;
pub mod view;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmissaoCommands;
use crate::context::AppContext;

/// Handle `rda emissao`.
pub async fn handle(
    action: EmissaoCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmissaoCommands::List(args) => list::run(args, ctx, flags).await,
        EmissaoCommands::Get { id } => get::run(id, ctx, flags).await,
        EmissaoCommands::Update(args) => update::run(args, ctx, flags).await,
        EmissaoCommands::Historico { id } => historico::run(id, ctx, flags).await,
        EmissaoCommands::Tipos => tipos::run(ctx, flags).await,
    }
}
