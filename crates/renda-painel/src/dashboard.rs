//! Derived figures for the aggregate dashboard: percentage shares per type,
//! abbreviated volume labels, truncated issuer names, and the chart-ready
//! monthly series.

use renda_core::entities::{EvolucaoMensal, Stats};
use renda_core::format::{mes_abrev, truncar, volume_abreviado};
use serde::Serialize;

/// Issuer names longer than this are truncated for compact display.
const MAX_NOME_EMISSOR: usize = 20;

/// How many issuers the "top issuers" panel shows.
const TOP_EMISSORES: usize = 5;

/// Per-type breakdown row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipoResumo {
    pub tipo: String,
    pub count: u64,
    pub volume: String,
    /// Share of the total record count, in percent.
    pub percentual: f64,
}

/// Top-issuer row, volume scaled to billions for the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissorResumo {
    pub nome: String,
    pub count: u64,
    pub volume_bi: f64,
}

/// One point of the monthly evolution line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PontoMensal {
    /// Month label (`Jan`..`Dez`).
    pub rotulo: String,
    pub ano: i32,
    pub volume_bi: f64,
    pub quantidade: u64,
}

/// Display model for the dashboard page. Both source resources must be
/// available; a failed fetch of either fails the whole view upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub total_emissoes: u64,
    pub volume_total: String,
    pub qtd_tipos: usize,
    pub qtd_emissores: usize,
    pub tipos: Vec<TipoResumo>,
    pub top_emissores: Vec<EmissorResumo>,
    pub evolucao: Vec<PontoMensal>,
}

impl DashboardView {
    /// Derive the dashboard from the aggregate snapshot and monthly series.
    #[must_use]
    pub fn montar(stats: &Stats, serie: &[EvolucaoMensal]) -> Self {
        let total = stats.total;
        let tipos = stats
            .por_tipo
            .iter()
            .map(|item| TipoResumo {
                tipo: item.tipo.clone(),
                count: item.count,
                volume: volume_abreviado(item.volume),
                percentual: if total == 0 {
                    0.0
                } else {
                    item.count as f64 / total as f64 * 100.0
                },
            })
            .collect();

        let top_emissores = stats
            .top_emissores
            .iter()
            .take(TOP_EMISSORES)
            .map(|item| EmissorResumo {
                nome: truncar(&item.emissor, MAX_NOME_EMISSOR),
                count: item.count,
                volume_bi: item.volume / 1e9,
            })
            .collect();

        let evolucao = serie
            .iter()
            .map(|ponto| PontoMensal {
                rotulo: mes_abrev(ponto.mes).unwrap_or("?").to_string(),
                ano: ponto.ano,
                volume_bi: ponto.volume / 1e9,
                quantidade: ponto.quantidade,
            })
            .collect();

        Self {
            total_emissoes: total,
            volume_total: volume_abreviado(stats.volume_total),
            qtd_tipos: stats.por_tipo.len(),
            qtd_emissores: stats.top_emissores.len(),
            tipos,
            top_emissores,
            evolucao,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use renda_core::entities::{EmissorStats, TipoStats};

    fn stats_exemplo() -> Stats {
        Stats {
            total: 1000,
            volume_total: 45_000_000_000.0,
            por_tipo: vec![
                TipoStats {
                    tipo: "CRI".to_string(),
                    count: 250,
                    volume: 20_000_000_000.0,
                },
                TipoStats {
                    tipo: "DEB".to_string(),
                    count: 750,
                    volume: 25_000_000_000.0,
                },
            ],
            top_emissores: vec![
                EmissorStats {
                    emissor: "Companhia Brasileira de Securitização".to_string(),
                    count: 40,
                    volume: 3_000_000_000.0,
                },
                EmissorStats {
                    emissor: "Acme".to_string(),
                    count: 30,
                    volume: 2_000_000_000.0,
                },
            ],
        }
    }

    #[test]
    fn percent_share_per_tipo() {
        let view = DashboardView::montar(&stats_exemplo(), &[]);
        assert_eq!(view.tipos[0].percentual, 25.0);
        assert_eq!(view.tipos[1].percentual, 75.0);
    }

    #[test]
    fn zero_total_does_not_divide_by_zero() {
        let stats = Stats {
            total: 0,
            volume_total: 0.0,
            por_tipo: vec![TipoStats {
                tipo: "CRI".to_string(),
                count: 0,
                volume: 0.0,
            }],
            top_emissores: Vec::new(),
        };
        let view = DashboardView::montar(&stats, &[]);
        assert_eq!(view.tipos[0].percentual, 0.0);
    }

    #[test]
    fn volume_labels_are_abbreviated() {
        let view = DashboardView::montar(&stats_exemplo(), &[]);
        assert_eq!(view.volume_total, "R$ 45.0B");
        assert_eq!(view.tipos[0].volume, "R$ 20.0B");
    }

    #[test]
    fn long_issuer_names_are_truncated() {
        let view = DashboardView::montar(&stats_exemplo(), &[]);
        assert_eq!(view.top_emissores[0].nome, "Companhia Brasileira...");
        assert_eq!(view.top_emissores[1].nome, "Acme");
    }

    #[test]
    fn only_top_five_issuers_are_kept() {
        let mut stats = stats_exemplo();
        stats.top_emissores = (0..8)
            .map(|i| EmissorStats {
                emissor: format!("Emissor {i}"),
                count: 10,
                volume: 1e9,
            })
            .collect();
        let view = DashboardView::montar(&stats, &[]);
        assert_eq!(view.top_emissores.len(), 5);
        assert_eq!(view.qtd_emissores, 8);
    }

    #[test]
    fn monthly_points_carry_labels_and_billions() {
        let serie = vec![
            EvolucaoMensal {
                mes: 1,
                ano: 2024,
                volume: 1_500_000_000.0,
                quantidade: 40,
            },
            EvolucaoMensal {
                mes: 11,
                ano: 2024,
                volume: 2_000_000_000.0,
                quantidade: 55,
            },
        ];
        let view = DashboardView::montar(&stats_exemplo(), &serie);
        assert_eq!(view.evolucao[0].rotulo, "Jan");
        assert_eq!(view.evolucao[0].volume_bi, 1.5);
        assert_eq!(view.evolucao[1].rotulo, "Nov");
        assert_eq!(view.evolucao[1].quantidade, 55);
    }
}
