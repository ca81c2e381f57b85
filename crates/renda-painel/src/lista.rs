//! List controller: owns filter/sort/page query state and keeps the visible
//! record set consistent with it.
//!
//! The controller performs no I/O. Every state change that requires a fetch
//! returns a [`QueryTicket`] carrying a monotonically increasing sequence
//! number; the caller issues the request and feeds the response back through
//! [`ListController::aplicar_resposta`]. A response whose sequence number no
//! longer matches the latest ticket is discarded silently, so overlapping
//! fetches cannot clobber newer state.

use renda_core::entities::{Emissao, EmissaoPage};
use renda_core::enums::{SortColumn, SortOrder};
use renda_core::query::{Filtros, ListQuery, SortSpec};

use crate::filtros::{FiltroDraft, FiltroError};

/// A fetch the caller must perform on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// Where the visible record set stands relative to the query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing fetched yet.
    #[default]
    Inicial,
    /// A ticket is outstanding.
    Carregando,
    /// The record set matches the applied query state.
    Pronto,
    /// The latest fetch failed; the user must change state to re-trigger.
    Falha,
}

/// Query-state machine for the issuance listing.
#[derive(Debug, Clone)]
pub struct ListController {
    rascunho: FiltroDraft,
    aplicados: Filtros,
    sort: SortSpec,
    page: u32,
    page_size: u32,
    total: u64,
    total_pages: u32,
    registros: Vec<Emissao>,
    estado: LoadState,
    seq: u64,
}

impl ListController {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            rascunho: FiltroDraft::default(),
            aplicados: Filtros::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size,
            total: 0,
            total_pages: 1,
            registros: Vec::new(),
            estado: LoadState::Inicial,
            seq: 0,
        }
    }

    /// Mutable access to the draft filter set. Editing the draft never
    /// triggers a fetch.
    pub fn rascunho_mut(&mut self) -> &mut FiltroDraft {
        &mut self.rascunho
    }

    #[must_use]
    pub const fn rascunho(&self) -> &FiltroDraft {
        &self.rascunho
    }

    /// Validate the draft and make it the applied filter set.
    ///
    /// On success the page cursor resets to 1 and a fetch ticket is
    /// returned. On failure nothing changes: no partial apply.
    ///
    /// # Errors
    ///
    /// Returns the [`FiltroError`] describing the first invalid field.
    pub fn aplicar_filtros(&mut self) -> Result<QueryTicket, FiltroError> {
        let filtros = self.rascunho.validar()?;
        self.aplicados = filtros;
        self.page = 1;
        Ok(self.ticket())
    }

    /// Reset draft and applied filters to empty and go back to page 1.
    pub fn limpar_filtros(&mut self) -> QueryTicket {
        self.rascunho = FiltroDraft::default();
        self.aplicados = Filtros::default();
        self.page = 1;
        self.ticket()
    }

    /// Select a sort column: same column flips direction, a new column
    /// starts descending. The page cursor is left where it is.
    pub fn ordenar_por(&mut self, coluna: SortColumn) -> QueryTicket {
        self.sort.selecionar(coluna);
        self.ticket()
    }

    /// Set the sort state outright, independent of what it was before.
    /// For non-interactive callers (e.g. command-line flags) where toggle
    /// semantics would invert the requested order.
    pub fn definir_ordenacao(&mut self, coluna: SortColumn, ordem: SortOrder) -> QueryTicket {
        self.sort = SortSpec { coluna, ordem };
        self.ticket()
    }

    /// Jump to page `n`, clamped to `[1, total_pages]`.
    pub fn ir_para_pagina(&mut self, n: u32) -> QueryTicket {
        self.page = n.clamp(1, self.total_pages.max(1));
        self.ticket()
    }

    /// Re-issue the current query unchanged (e.g. after a successful edit).
    pub fn recarregar(&mut self) -> QueryTicket {
        self.ticket()
    }

    /// Apply a fetched page. Returns `false` (state untouched) when `seq`
    /// is not the latest issued ticket.
    pub fn aplicar_resposta(&mut self, seq: u64, resposta: EmissaoPage) -> bool {
        if seq != self.seq {
            return false;
        }
        self.registros = resposta.data;
        self.total = resposta.total;
        self.total_pages = resposta.total_pages;
        self.estado = LoadState::Pronto;
        true
    }

    /// Record a failed fetch. Stale failures are ignored like stale
    /// responses; a current failure replaces the record set with the error
    /// state. No automatic retry.
    pub fn registrar_falha(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.registros.clear();
        self.estado = LoadState::Falha;
        true
    }

    fn ticket(&mut self) -> QueryTicket {
        self.seq += 1;
        self.estado = LoadState::Carregando;
        QueryTicket {
            seq: self.seq,
            query: ListQuery {
                page: self.page,
                page_size: self.page_size,
                sort: self.sort,
                filtros: self.aplicados.clone(),
            },
        }
    }

    // --- Read accessors ---

    /// Records of the current page, in server order (never re-sorted here).
    #[must_use]
    pub fn registros(&self) -> &[Emissao] {
        &self.registros
    }

    #[must_use]
    pub const fn filtros_aplicados(&self) -> &Filtros {
        &self.aplicados
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    #[must_use]
    pub const fn pagina(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn total_paginas(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn estado(&self) -> LoadState {
        self.estado
    }

    /// Whether the "previous page" control should be enabled.
    #[must_use]
    pub const fn pode_voltar(&self) -> bool {
        self.page > 1
    }

    /// Whether the "next page" control should be enabled.
    #[must_use]
    pub const fn pode_avancar(&self) -> bool {
        self.page < self.total_pages
    }
}
