use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rda` binary.
#[derive(Debug, Parser)]
#[command(name = "rda", version, about = "Renda - console de emissões de renda fixa")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{EmissaoCommands, GestorCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["rda", "--format", "json", "--verbose", "stats"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["rda", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["rda", "--format", "xml", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn api_url_override_is_global() {
        let cli = Cli::try_parse_from([
            "rda",
            "emissao",
            "tipos",
            "--api-url",
            "http://localhost:9000",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.api_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn emissao_list_accepts_filter_flags() {
        let cli = Cli::try_parse_from([
            "rda",
            "emissao",
            "list",
            "--tipo",
            "CRI",
            "--valor-min",
            "1000000",
            "--sort-by",
            "valor",
            "--sort-order",
            "asc",
            "--page",
            "2",
        ])
        .expect("cli should parse");

        let Commands::Emissao { action } = cli.command else {
            panic!("expected emissao subcommand");
        };
        let EmissaoCommands::List(args) = action else {
            panic!("expected list");
        };
        assert_eq!(args.tipo.as_deref(), Some("CRI"));
        assert_eq!(args.valor_min.as_deref(), Some("1000000"));
        assert_eq!(args.sort_by.as_deref(), Some("valor"));
        assert_eq!(args.sort_order.as_deref(), Some("asc"));
        assert_eq!(args.page, Some(2));
    }

    #[test]
    fn gestor_login_takes_positional_name() {
        let cli = Cli::try_parse_from(["rda", "gestor", "login", "Ana Souza"])
            .expect("cli should parse");
        let Commands::Gestor { action } = cli.command else {
            panic!("expected gestor subcommand");
        };
        assert!(matches!(action, GestorCommands::Login { nome } if nome == "Ana Souza"));
    }
}
