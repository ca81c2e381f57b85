//! Operations on issuance records: listing, lookup, update, types, history.

use renda_core::entities::{Emissao, EmissaoPage, EmissaoUpdate, HistoricoEntry};
use renda_core::query::ListQuery;

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// List issuances: `GET /emissoes` with filter, sort, and page params.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn listar(&self, query: &ListQuery) -> Result<EmissaoPage, ApiError> {
        tracing::debug!(page = query.page, "listing emissões");
        let resp = self
            .http
            .get(self.url("/emissoes"))
            .query(&query.params())
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Fetch one issuance by id: `GET /emissoes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; a missing record surfaces as
    /// [`ApiError::Business`] with the backend's message.
    pub async fn obter(&self, id: i64) -> Result<Emissao, ApiError> {
        let resp = self.http.get(self.url(&format!("/emissoes/{id}"))).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Update one issuance: `PUT /emissoes/{id}`. A successful update causes
    /// the backend to append one audit entry for the fields that changed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for field-level rejections,
    /// [`ApiError::Business`] for single-message rejections.
    pub async fn atualizar(&self, id: i64, body: &EmissaoUpdate) -> Result<Emissao, ApiError> {
        tracing::debug!(id, gestor = %body.gestor_nome, "updating emissão");
        let resp = self
            .http
            .put(self.url(&format!("/emissoes/{id}")))
            .json(body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Distinct issuance types known to the backend: `GET /emissoes/tipos`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn tipos(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.http.get(self.url("/emissoes/tipos")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Audit history for one issuance, server-ordered:
    /// `GET /emissoes/{id}/historico`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn historico(&self, id: i64) -> Result<Vec<HistoricoEntry>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/emissoes/{id}/historico")))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use renda_core::entities::EmissaoPage;
    use renda_core::enums::TipoEmissao;

    const LIST_FIXTURE: &str = r#"{
        "data": [
            {
                "id": 1,
                "data": "2024-01-15T00:00:00Z",
                "tipo": "CRA",
                "emissor": "Agro Forte",
                "valor": 75000000.0,
                "link": null,
                "created_at": "2024-01-15T08:00:00Z",
                "updated_at": "2024-01-15T08:00:00Z"
            }
        ],
        "total": 1,
        "total_pages": 1
    }"#;

    #[test]
    fn parse_list_response() {
        let page: EmissaoPage = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].tipo, TipoEmissao::Cra);
        assert_eq!(page.data[0].emissor, "Agro Forte");
    }

    #[test]
    fn parse_tipos_response() {
        let tipos: Vec<String> = serde_json::from_str(r#"["CRI", "CRA", "DEB", "NC"]"#).unwrap();
        assert_eq!(tipos.len(), 4);
        assert_eq!(tipos[0], "CRI");
    }
}
