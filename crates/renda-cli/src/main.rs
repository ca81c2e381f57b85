use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rda error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    // gestor commands work entirely against the local identity store
    if let cli::Commands::Gestor { action } = &cli.command {
        return commands::gestor::handle(action, &flags);
    }

    let config = load_config(&flags)?;
    let ctx = context::AppContext::new(&config);

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RENDA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<renda_config::RendaConfig> {
    let mut config = renda_config::RendaConfig::load_with_dotenv()?;
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
    }
    config.api.validate()?;
    Ok(config)
}
