use renda_core::entities::Emissao;
use renda_core::format::{data_br, moeda};
use serde::Serialize;

/// One issuance row, formatted for display.
#[derive(Debug, Serialize)]
pub struct EmissaoView {
    pub id: i64,
    pub data: String,
    pub tipo: String,
    pub emissor: String,
    pub valor: String,
    pub link: String,
}

impl EmissaoView {
    #[must_use]
    pub fn montar(emissao: &Emissao) -> Self {
        Self {
            id: emissao.id,
            data: data_br(emissao.data.date_naive()),
            tipo: emissao.tipo.to_string(),
            emissor: emissao.emissor.clone(),
            valor: moeda(emissao.valor),
            link: emissao.link.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}
