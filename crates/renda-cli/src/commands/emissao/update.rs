use renda_client::ApiError;
use renda_painel::formulario::{EditForm, campos};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UpdateArgs;
use crate::commands::emissao::view::EmissaoView;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_args(&args)?;

    let Some(gestor) = renda_gestor::load() else {
        anyhow::bail!("nenhum gestor identificado. Rode 'rda gestor login <nome>' primeiro.")
    };

    let emissao = ctx.client.obter(args.id).await?;
    let mut form = EditForm::carregar(&emissao);
    aplicar_edicoes(&mut form, &args);

    let Some(body) = form.submeter(&gestor) else {
        return Err(erros_do_formulario(&form));
    };

    match ctx.client.atualizar(args.id, &body).await {
        Ok(atualizada) => {
            if !flags.quiet {
                eprintln!("emissão {} atualizada por {gestor}", atualizada.id);
            }
            output(&EmissaoView::montar(&atualizada), flags.format)
        }
        Err(ApiError::Validation(field_errors)) => {
            form.aplicar_erros_backend(
                field_errors
                    .iter()
                    .filter_map(|erro| erro.campo().map(|campo| (campo, erro.msg.as_str()))),
            );
            Err(erros_do_formulario(&form))
        }
        Err(ApiError::Business(mensagem)) => anyhow::bail!("{mensagem}"),
        Err(error) => Err(error.into()),
    }
}

fn aplicar_edicoes(form: &mut EditForm, args: &UpdateArgs) {
    if let Some(data) = &args.data {
        form.editar(campos::DATA, data);
    }
    if let Some(tipo) = &args.tipo {
        form.editar(campos::TIPO, tipo);
    }
    if let Some(emissor) = &args.emissor {
        form.editar(campos::EMISSOR, emissor);
    }
    if let Some(valor) = &args.valor {
        form.editar(campos::VALOR, valor);
    }
    if let Some(link) = &args.link {
        form.editar(campos::LINK, link);
    }
}

fn erros_do_formulario(form: &EditForm) -> anyhow::Error {
    for (campo, mensagem) in form.erros() {
        eprintln!("  {campo}: {mensagem}");
    }
    anyhow::anyhow!(
        "emissão {} não atualizada: {} campo(s) inválido(s)",
        form.id(),
        form.erros().len()
    )
}

fn validate_update_args(args: &UpdateArgs) -> anyhow::Result<()> {
    if args.data.is_none()
        && args.tipo.is_none()
        && args.emissor.is_none()
        && args.valor.is_none()
        && args.link.is_none()
    {
        anyhow::bail!(
            "At least one of --data, --tipo, --emissor, --valor, or --link must be provided"
        );
    }
    Ok(())
}
