//! Closed enumerations for issuance types and list ordering.
//!
//! `TipoEmissao` serializes in its uppercase wire form (`"CRI"`, `"CRA"`, ...)
//! as the backend stores it. Sort enums use `snake_case` to match the
//! `sort_by`/`sort_order` query parameters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TipoEmissao
// ---------------------------------------------------------------------------

/// Category of a fixed-income issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoEmissao {
    /// Certificado de Recebíveis Imobiliários.
    Cri,
    /// Certificado de Recebíveis do Agronegócio.
    Cra,
    /// Debênture.
    Deb,
    /// Nota Comercial.
    Nc,
}

impl TipoEmissao {
    /// All known issuance types, in display order.
    pub const ALL: [Self; 4] = [Self::Cri, Self::Cra, Self::Deb, Self::Nc];

    /// Return the uppercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cri => "CRI",
            Self::Cra => "CRA",
            Self::Deb => "DEB",
            Self::Nc => "NC",
        }
    }

    /// Parse the uppercase wire form. Case-insensitive on input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CRI" => Some(Self::Cri),
            "CRA" => Some(Self::Cra),
            "DEB" => Some(Self::Deb),
            "NC" => Some(Self::Nc),
            _ => None,
        }
    }
}

impl fmt::Display for TipoEmissao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortColumn / SortOrder
// ---------------------------------------------------------------------------

/// Sortable columns of the issuance listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Data,
    Tipo,
    Emissor,
    Valor,
}

impl SortColumn {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Data => "data",
            Self::Tipo => "tipo",
            Self::Emissor => "emissor",
            Self::Valor => "valor",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
