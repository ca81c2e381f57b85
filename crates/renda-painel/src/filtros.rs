//! Draft filter set and its structural validation.
//!
//! Two filter states exist at once: the *draft* being edited (free text, as
//! entered) and the *applied* set driving queries. Validation happens only on
//! apply; a rejected draft leaves the applied set untouched.

use chrono::NaiveDate;
use renda_core::enums::TipoEmissao;
use renda_core::query::Filtros;
use thiserror::Error;

/// The filter set as the user typed it. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltroDraft {
    pub tipo: String,
    pub emissor: String,
    pub valor_min: String,
    pub valor_max: String,
    pub data_inicio: String,
    pub data_fim: String,
}

/// Why a draft filter set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiltroError {
    /// The field is not a real calendar date (unparseable or a day that
    /// does not exist, e.g. 31/11).
    #[error("a {campo} informada é inválida (dia inexistente no calendário)")]
    DataInvalida { campo: &'static str },

    #[error("a data inicial não pode ser maior que a data final")]
    PeriodoInvertido,

    #[error("o {campo} informado não é um número válido")]
    ValorInvalido { campo: &'static str },

    #[error("o valor mínimo não pode ser maior que o valor máximo")]
    FaixaInvertida,

    #[error("tipo de emissão desconhecido: {0}")]
    TipoDesconhecido(String),
}

impl FiltroDraft {
    /// Whether every field is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tipo.trim().is_empty()
            && self.emissor.trim().is_empty()
            && self.valor_min.trim().is_empty()
            && self.valor_max.trim().is_empty()
            && self.data_inicio.trim().is_empty()
            && self.data_fim.trim().is_empty()
    }

    /// Validate the draft and produce the typed filter set.
    ///
    /// Checks, in order: calendar validity of both dates, date range
    /// ordering, numeric validity of both values, value range ordering,
    /// known issuance type. All-or-nothing: any failure rejects the whole
    /// draft.
    ///
    /// # Errors
    ///
    /// Returns the first [`FiltroError`] found.
    pub fn validar(&self) -> Result<Filtros, FiltroError> {
        let data_inicio = parse_data(&self.data_inicio, "Data de Início")?;
        let data_fim = parse_data(&self.data_fim, "Data de Fim")?;
        if let (Some(inicio), Some(fim)) = (data_inicio, data_fim) {
            if inicio > fim {
                return Err(FiltroError::PeriodoInvertido);
            }
        }

        let valor_min = parse_valor(&self.valor_min, "valor mínimo")?;
        let valor_max = parse_valor(&self.valor_max, "valor máximo")?;
        if let (Some(min), Some(max)) = (valor_min, valor_max) {
            if min > max {
                return Err(FiltroError::FaixaInvertida);
            }
        }

        let tipo = match self.tipo.trim() {
            "" => None,
            raw => Some(
                TipoEmissao::parse(raw).ok_or_else(|| FiltroError::TipoDesconhecido(raw.to_string()))?,
            ),
        };

        let emissor = match self.emissor.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(Filtros {
            tipo,
            emissor,
            valor_min,
            valor_max,
            data_inicio,
            data_fim,
        })
    }
}

fn parse_data(raw: &str, campo: &'static str) -> Result<Option<NaiveDate>, FiltroError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FiltroError::DataInvalida { campo })
}

fn parse_valor(raw: &str, campo: &'static str) -> Result<Option<f64>, FiltroError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or(FiltroError::ValorInvalido { campo })
}
