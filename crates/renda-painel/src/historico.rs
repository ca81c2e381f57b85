//! Read-only rendering model for the change history of one issuance.
//!
//! Entries come back server-ordered and are never re-sorted here. An empty
//! sequence is a distinct "no changes recorded" state, not an empty table.

use chrono::DateTime;
use renda_core::entities::HistoricoEntry;
use renda_core::format::{data_br, data_hora_br, moeda};
use serde::Serialize;

/// Rendered placeholder for a null/absent previous or new value.
pub const VAZIO: &str = "(vazio)";

/// Message shown when a record has no audit entries.
pub const SEM_ALTERACOES: &str = "Nenhuma alteração registrada para esta emissão.";

/// One field-level change, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alteracao {
    pub campo: String,
    pub anterior: String,
    pub novo: String,
}

/// One audit entry, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntradaFormatada {
    pub gestor: String,
    pub quando: String,
    pub alteracoes: Vec<Alteracao>,
}

/// Display model for a record's change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricoView {
    pub entradas: Vec<EntradaFormatada>,
}

impl HistoricoView {
    /// Build the view from server-ordered entries.
    #[must_use]
    pub fn montar(entradas: &[HistoricoEntry]) -> Self {
        let entradas = entradas
            .iter()
            .map(|entrada| EntradaFormatada {
                gestor: entrada.gestor_nome.clone(),
                quando: data_hora_br(entrada.data_alteracao),
                alteracoes: entrada
                    .campos_alterados
                    .iter()
                    .map(|(campo, mudanca)| Alteracao {
                        campo: traduzir_campo(campo).to_string(),
                        anterior: formatar_valor_campo(campo, mudanca.anterior.as_ref()),
                        novo: formatar_valor_campo(campo, mudanca.novo.as_ref()),
                    })
                    .collect(),
            })
            .collect();
        Self { entradas }
    }

    /// Whether the "no changes recorded" state should render.
    #[must_use]
    pub fn vazio(&self) -> bool {
        self.entradas.is_empty()
    }
}

/// Display label for a wire field name. Unknown fields pass through.
fn traduzir_campo(campo: &str) -> &str {
    match campo {
        "data" => "Data",
        "tipo" => "Tipo",
        "emissor" => "Emissor",
        "valor" => "Valor",
        "link" => "Link",
        outro => outro,
    }
}

/// Format one side of a change per field type: currency for `valor`,
/// calendar date for `data`, verbatim otherwise. Null or empty renders as
/// the explicit `(vazio)` placeholder.
fn formatar_valor_campo(campo: &str, valor: Option<&serde_json::Value>) -> String {
    let Some(valor) = valor else {
        return VAZIO.to_string();
    };
    if valor.is_null() {
        return VAZIO.to_string();
    }

    if campo == "valor" {
        if let Some(numero) = valor.as_f64() {
            return moeda(numero);
        }
        if let Some(texto) = valor.as_str() {
            if let Ok(numero) = texto.parse::<f64>() {
                return moeda(numero);
            }
        }
    }

    if campo == "data" {
        if let Some(texto) = valor.as_str() {
            if let Ok(instante) = DateTime::parse_from_rfc3339(texto) {
                return data_br(instante.date_naive());
            }
        }
    }

    match valor {
        serde_json::Value::String(texto) if texto.is_empty() => VAZIO.to_string(),
        serde_json::Value::String(texto) => texto.clone(),
        outro => outro.to_string(),
    }
}
