use clap::{Args, Subcommand};

/// Issuance record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmissaoCommands {
    /// List issuances with filters, sorting and pagination.
    List(ListArgs),
    /// Get one issuance by ID.
    Get { id: i64 },
    /// Update fields of an issuance (requires a registered gestor).
    Update(UpdateArgs),
    /// Show the change history of an issuance.
    Historico { id: i64 },
    /// List the known issuance types.
    Tipos,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Filter by type (CRI, CRA, DEB, NC).
    #[arg(long)]
    pub tipo: Option<String>,
    /// Filter by issuer name substring.
    #[arg(long)]
    pub emissor: Option<String>,
    /// Start of the date range (YYYY-MM-DD).
    #[arg(long)]
    pub data_inicio: Option<String>,
    /// End of the date range (YYYY-MM-DD).
    #[arg(long)]
    pub data_fim: Option<String>,
    /// Minimum value in BRL.
    #[arg(long)]
    pub valor_min: Option<String>,
    /// Maximum value in BRL.
    #[arg(long)]
    pub valor_max: Option<String>,
    /// Sort column: data, tipo, emissor, valor, id.
    #[arg(long)]
    pub sort_by: Option<String>,
    /// Sort direction: asc, desc (default desc).
    #[arg(long, requires = "sort_by")]
    pub sort_order: Option<String>,
    /// Page to show (clamped to the available range).
    #[arg(long)]
    pub page: Option<u32>,
    /// Records per page.
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,
    /// New issuance date (YYYY-MM-DD).
    #[arg(long)]
    pub data: Option<String>,
    /// New type (CRI, CRA, DEB, NC).
    #[arg(long)]
    pub tipo: Option<String>,
    /// New issuer name.
    #[arg(long)]
    pub emissor: Option<String>,
    /// New value in BRL.
    #[arg(long)]
    pub valor: Option<String>,
    /// New document link (empty string clears it).
    #[arg(long)]
    pub link: Option<String>,
}
