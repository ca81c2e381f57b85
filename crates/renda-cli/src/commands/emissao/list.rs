use renda_core::enums::{SortColumn, SortOrder};
use renda_painel::lista::{ListController, QueryTicket};
use serde::Serialize;

use crate::cli::subcommands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::emissao::view::EmissaoView;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output;

#[derive(Serialize)]
struct ListaResposta {
    registros: Vec<EmissaoView>,
    pagina: u32,
    total_paginas: u32,
    total: u64,
}

pub async fn run(args: ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut ctl = ListController::new(args.page_size.unwrap_or(ctx.page_size));

    preencher_rascunho(&mut ctl, &args);
    aplicar_ordenacao(&mut ctl, &args)?;

    let ticket = if ctl.rascunho().is_empty() {
        ctl.recarregar()
    } else {
        ctl.aplicar_filtros()?
    };
    buscar(&mut ctl, ticket, ctx).await?;

    // page bounds are only known after the first response
    if let Some(pagina) = args.page {
        if pagina != ctl.pagina() {
            let ticket = ctl.ir_para_pagina(pagina);
            buscar(&mut ctl, ticket, ctx).await?;
        }
    }

    let resposta = ListaResposta {
        registros: ctl.registros().iter().map(EmissaoView::montar).collect(),
        pagina: ctl.pagina(),
        total_paginas: ctl.total_paginas(),
        total: ctl.total(),
    };

    if flags.format == OutputFormat::Table {
        output::output(&resposta.registros, flags.format)?;
        if !flags.quiet {
            println!(
                "{} registro(s), página {} de {}",
                resposta.total, resposta.pagina, resposta.total_paginas
            );
        }
        return Ok(());
    }
    output::output(&resposta, flags.format)
}

fn preencher_rascunho(ctl: &mut ListController, args: &ListArgs) {
    let rascunho = ctl.rascunho_mut();
    if let Some(tipo) = &args.tipo {
        rascunho.tipo.clone_from(tipo);
    }
    if let Some(emissor) = &args.emissor {
        rascunho.emissor.clone_from(emissor);
    }
    if let Some(data_inicio) = &args.data_inicio {
        rascunho.data_inicio.clone_from(data_inicio);
    }
    if let Some(data_fim) = &args.data_fim {
        rascunho.data_fim.clone_from(data_fim);
    }
    if let Some(valor_min) = &args.valor_min {
        rascunho.valor_min.clone_from(valor_min);
    }
    if let Some(valor_max) = &args.valor_max {
        rascunho.valor_max.clone_from(valor_max);
    }
}

fn aplicar_ordenacao(ctl: &mut ListController, args: &ListArgs) -> anyhow::Result<()> {
    let Some(coluna) = args.sort_by.as_deref() else {
        return Ok(());
    };
    let coluna = parse_enum::<SortColumn>(coluna, "sort-by")?;
    let ordem = match args.sort_order.as_deref() {
        Some(raw) => parse_enum::<SortOrder>(raw, "sort-order")?,
        None => SortOrder::Desc,
    };

    // flags state the order outright; the interactive toggle does not apply
    ctl.definir_ordenacao(coluna, ordem);
    Ok(())
}

async fn buscar(
    ctl: &mut ListController,
    ticket: QueryTicket,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    tracing::debug!(seq = ticket.seq, page = ticket.query.page, "buscando página");
    match ctx.client.listar(&ticket.query).await {
        Ok(resposta) => {
            ctl.aplicar_resposta(ticket.seq, resposta);
            Ok(())
        }
        Err(error) => {
            ctl.registrar_falha(ticket.seq);
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use renda_core::enums::{SortColumn, SortOrder};
    use renda_painel::lista::ListController;

    use super::aplicar_ordenacao;
    use crate::cli::subcommands::ListArgs;

    fn args(sort_by: Option<&str>, sort_order: Option<&str>) -> ListArgs {
        ListArgs {
            tipo: None,
            emissor: None,
            data_inicio: None,
            data_fim: None,
            valor_min: None,
            valor_max: None,
            sort_by: sort_by.map(str::to_string),
            sort_order: sort_order.map(str::to_string),
            page: None,
            page_size: None,
        }
    }

    #[test]
    fn sort_by_default_column_stays_descending() {
        let mut ctl = ListController::new(15);
        aplicar_ordenacao(&mut ctl, &args(Some("data"), None)).expect("valid flags");
        assert_eq!(ctl.sort().coluna, SortColumn::Data);
        assert_eq!(ctl.sort().ordem, SortOrder::Desc);
    }

    #[test]
    fn explicit_desc_on_default_column_is_kept() {
        let mut ctl = ListController::new(15);
        aplicar_ordenacao(&mut ctl, &args(Some("data"), Some("desc"))).expect("valid flags");
        assert_eq!(ctl.sort().coluna, SortColumn::Data);
        assert_eq!(ctl.sort().ordem, SortOrder::Desc);
    }

    #[test]
    fn explicit_asc_is_applied() {
        let mut ctl = ListController::new(15);
        aplicar_ordenacao(&mut ctl, &args(Some("valor"), Some("asc"))).expect("valid flags");
        assert_eq!(ctl.sort().coluna, SortColumn::Valor);
        assert_eq!(ctl.sort().ordem, SortOrder::Asc);
    }

    #[test]
    fn missing_sort_flags_keep_the_default() {
        let mut ctl = ListController::new(15);
        aplicar_ordenacao(&mut ctl, &args(None, None)).expect("no flags");
        assert_eq!(ctl.sort().coluna, SortColumn::Data);
        assert_eq!(ctl.sort().ordem, SortOrder::Desc);
    }

    #[test]
    fn invalid_sort_column_errors() {
        let mut ctl = ListController::new(15);
        let err = aplicar_ordenacao(&mut ctl, &args(Some("rating"), None)).expect_err("bad column");
        assert!(err.to_string().contains("invalid sort-by 'rating'"));
    }
}
