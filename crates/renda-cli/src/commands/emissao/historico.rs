use renda_painel::historico::{HistoricoView, SEM_ALTERACOES};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entradas = ctx.client.historico(id).await?;
    let view = HistoricoView::montar(&entradas);

    if flags.format != OutputFormat::Table {
        return output::output(&view, flags.format);
    }

    if view.vazio() {
        println!("{SEM_ALTERACOES}");
        return Ok(());
    }

    for entrada in &view.entradas {
        println!("{}  {}", entrada.quando, entrada.gestor);
        let rows = entrada
            .alteracoes
            .iter()
            .map(|alteracao| {
                vec![
                    alteracao.campo.clone(),
                    alteracao.anterior.clone(),
                    alteracao.novo.clone(),
                ]
            })
            .collect::<Vec<_>>();
        let table =
            output::table::render_entity_table(&["campo", "antes", "depois"], &rows, output::term_width());
        for line in table.lines() {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}
