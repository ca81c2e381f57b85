//! Domain entities mirrored from the emissões REST API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TipoEmissao;

/// A single fixed-income issuance record. The backend is the system of
/// record; `created_at`/`updated_at` are server-managed and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Emissao {
    pub id: i64,
    pub data: DateTime<Utc>,
    pub tipo: TipoEmissao,
    pub emissor: String,
    pub valor: f64,
    pub link: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of the issuance listing, as returned by `GET /emissoes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmissaoPage {
    pub data: Vec<Emissao>,
    pub total: u64,
    pub total_pages: u32,
}

/// Body of `PUT /emissoes/{id}`. Carries the full record plus the manager
/// name for audit attribution; diffing against the stored record is the
/// backend's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmissaoUpdate {
    pub data: DateTime<Utc>,
    pub tipo: TipoEmissao,
    pub emissor: String,
    pub valor: f64,
    pub link: Option<String>,
    pub gestor_nome: String,
}

/// Previous/new value pair for one changed field of an audit entry. Values
/// are kept as raw JSON scalars; display formatting is per-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldChange {
    pub anterior: Option<serde_json::Value>,
    pub novo: Option<serde_json::Value>,
}

/// An append-only audit entry recording one update to an issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoricoEntry {
    pub id: i64,
    pub gestor_nome: String,
    pub data_alteracao: DateTime<Utc>,
    pub campos_alterados: BTreeMap<String, FieldChange>,
}

/// Aggregate snapshot from `GET /stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Stats {
    pub total: u64,
    pub volume_total: f64,
    pub por_tipo: Vec<TipoStats>,
    pub top_emissores: Vec<EmissorStats>,
}

/// Count and volume for one issuance type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TipoStats {
    pub tipo: String,
    pub count: u64,
    pub volume: f64,
}

/// Count and volume for one issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmissorStats {
    pub emissor: String,
    pub count: u64,
    pub volume: f64,
}

/// One month of the `GET /stats/evolucao-mensal` series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvolucaoMensal {
    /// Calendar month, 1-12.
    pub mes: u32,
    pub ano: i32,
    pub volume: f64,
    pub quantidade: u64,
}
