use crate::cli::GlobalFlags;
use crate::commands::emissao::view::EmissaoView;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let emissao = ctx.client.obter(id).await?;
    output(&EmissaoView::montar(&emissao), flags.format)
}
