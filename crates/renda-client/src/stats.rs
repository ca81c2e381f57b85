//! Aggregate statistics and the monthly time series.

use renda_core::entities::{EvolucaoMensal, Stats};

use crate::{ApiClient, error::ApiError, http::check_response};

impl ApiClient {
    /// Aggregate snapshot: `GET /stats`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let resp = self.http.get(self.url("/stats")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Monthly volume/count series: `GET /stats/evolucao-mensal`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport or status failure.
    pub async fn evolucao_mensal(&self) -> Result<Vec<EvolucaoMensal>, ApiError> {
        let resp = self.http.get(self.url("/stats/evolucao-mensal")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Both dashboard resources fetched in parallel and awaited jointly.
    /// Either failure fails the whole view.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] from either fetch.
    pub async fn dashboard(&self) -> Result<(Stats, Vec<EvolucaoMensal>), ApiError> {
        tokio::try_join!(self.stats(), self.evolucao_mensal())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use renda_core::entities::{EvolucaoMensal, Stats};

    const STATS_FIXTURE: &str = r#"{
        "total": 1200,
        "volume_total": 45000000000.0,
        "por_tipo": [
            { "tipo": "CRI", "count": 500, "volume": 20000000000.0 },
            { "tipo": "DEB", "count": 700, "volume": 25000000000.0 }
        ],
        "top_emissores": [
            { "emissor": "Acme Securitizadora", "count": 40, "volume": 3000000000.0 }
        ]
    }"#;

    #[test]
    fn parse_stats_snapshot() {
        let stats: Stats = serde_json::from_str(STATS_FIXTURE).unwrap();
        assert_eq!(stats.total, 1200);
        assert_eq!(stats.por_tipo.len(), 2);
        assert_eq!(stats.top_emissores[0].emissor, "Acme Securitizadora");
    }

    #[test]
    fn parse_monthly_series() {
        let json = r#"[
            { "mes": 1, "ano": 2024, "volume": 1500000000.0, "quantidade": 40 },
            { "mes": 2, "ano": 2024, "volume": 2100000000.0, "quantidade": 55 }
        ]"#;
        let series: Vec<EvolucaoMensal> = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].mes, 2);
        assert_eq!(series[1].quantidade, 55);
    }
}
