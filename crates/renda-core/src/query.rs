//! Query types for the issuance listing: applied filter set, sort
//! specification, and the full list query with its wire parameters.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SortColumn, SortOrder, TipoEmissao};

/// The applied filter set currently driving server queries. A sparse
/// predicate mapping: every field is optional, and an empty set matches all
/// records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Filtros {
    pub tipo: Option<TipoEmissao>,
    /// Substring match against the issuer name.
    pub emissor: Option<String>,
    pub valor_min: Option<f64>,
    pub valor_max: Option<f64>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl Filtros {
    /// Whether no predicate is set (matches all records).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tipo.is_none()
            && self.emissor.is_none()
            && self.valor_min.is_none()
            && self.valor_max.is_none()
            && self.data_inicio.is_none()
            && self.data_fim.is_none()
    }
}

/// Active sort: exactly one column plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortSpec {
    pub coluna: SortColumn,
    pub ordem: SortOrder,
}

impl Default for SortSpec {
    /// Listing opens sorted by issuance date, newest first.
    fn default() -> Self {
        Self {
            coluna: SortColumn::Data,
            ordem: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    /// Select `coluna` as the sort column. Re-selecting the current column
    /// flips the direction; a new column resets to descending.
    pub fn selecionar(&mut self, coluna: SortColumn) {
        if self.coluna == coluna {
            self.ordem = self.ordem.flipped();
        } else {
            self.coluna = coluna;
            self.ordem = SortOrder::Desc;
        }
    }
}

/// Everything one `GET /emissoes` read carries: applied filters, sort, and
/// the page cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub sort: SortSpec,
    pub filtros: Filtros,
}

impl ListQuery {
    /// Render the query-string parameters in wire form. Unset filters are
    /// omitted entirely rather than sent empty.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("sort_by", self.sort.coluna.to_string()),
            ("sort_order", self.sort.ordem.to_string()),
        ];
        if let Some(tipo) = self.filtros.tipo {
            params.push(("tipo", tipo.to_string()));
        }
        if let Some(emissor) = &self.filtros.emissor {
            params.push(("emissor", emissor.clone()));
        }
        if let Some(min) = self.filtros.valor_min {
            params.push(("valor_min", min.to_string()));
        }
        if let Some(max) = self.filtros.valor_max {
            params.push(("valor_max", max.to_string()));
        }
        if let Some(inicio) = self.filtros.data_inicio {
            params.push(("data_inicio", inicio.format("%Y-%m-%d").to_string()));
        }
        if let Some(fim) = self.filtros.data_fim {
            params.push(("data_fim", fim.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
