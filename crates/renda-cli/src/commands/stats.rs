use renda_painel::dashboard::DashboardView;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // both resources or nothing; a partial dashboard is worse than an error
    let (stats, serie) = ctx.client.dashboard().await?;
    let view = DashboardView::montar(&stats, &serie);

    if flags.format != OutputFormat::Table {
        return output::output(&view, flags.format);
    }

    println!("Total de emissões: {}", view.total_emissoes);
    println!("Volume total:      {}", view.volume_total);
    println!("Tipos:             {}", view.qtd_tipos);
    println!("Emissores:         {}", view.qtd_emissores);

    if !view.tipos.is_empty() {
        println!("\nPor tipo");
        let rows = view
            .tipos
            .iter()
            .map(|tipo| {
                vec![
                    tipo.tipo.clone(),
                    tipo.count.to_string(),
                    tipo.volume.clone(),
                    format!("{:.1}%", tipo.percentual),
                ]
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            output::table::render_entity_table(
                &["tipo", "qtd", "volume", "participação"],
                &rows,
                output::term_width(),
            )
        );
    }

    if !view.top_emissores.is_empty() {
        println!("\nTop emissores");
        let rows = view
            .top_emissores
            .iter()
            .map(|emissor| {
                vec![
                    emissor.nome.clone(),
                    emissor.count.to_string(),
                    format!("{:.2}", emissor.volume_bi),
                ]
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            output::table::render_entity_table(
                &["emissor", "qtd", "volume (R$ bi)"],
                &rows,
                output::term_width(),
            )
        );
    }

    if !view.evolucao.is_empty() {
        println!("\nEvolução mensal");
        let rows = view
            .evolucao
            .iter()
            .map(|ponto| {
                vec![
                    format!("{}/{}", ponto.rotulo, ponto.ano),
                    ponto.quantidade.to_string(),
                    format!("{:.2}", ponto.volume_bi),
                ]
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            output::table::render_entity_table(
                &["mês", "qtd", "volume (R$ bi)"],
                &rows,
                output::term_width(),
            )
        );
    }

    Ok(())
}
