//! Edit form controller for a single issuance record.
//!
//! Form fields are held as strings, exactly as entered. `submeter` runs
//! structural validation and only then builds the wire payload; a failed
//! validation produces a field→message map and no payload, so no network
//! call happens for known-invalid input. Backend field errors map back onto
//! the same field names, and user input is never discarded on failure.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use renda_core::entities::{Emissao, EmissaoUpdate};
use renda_core::enums::TipoEmissao;

/// Form field names, matching the wire field names of the update body.
pub mod campos {
    pub const DATA: &str = "data";
    pub const TIPO: &str = "tipo";
    pub const EMISSOR: &str = "emissor";
    pub const VALOR: &str = "valor";
    pub const LINK: &str = "link";
}

/// Per-field state for editing one issuance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    id: i64,
    pub data: String,
    pub tipo: String,
    pub emissor: String,
    pub valor: String,
    pub link: String,
    erros: BTreeMap<String, String>,
}

impl EditForm {
    /// Seed the form from a record: date as a plain `YYYY-MM-DD` calendar
    /// day, value as its decimal string, absent link as empty.
    #[must_use]
    pub fn carregar(emissao: &Emissao) -> Self {
        Self {
            id: emissao.id,
            data: emissao.data.date_naive().format("%Y-%m-%d").to_string(),
            tipo: emissao.tipo.to_string(),
            emissor: emissao.emissor.clone(),
            valor: emissao.valor.to_string(),
            link: emissao.link.clone().unwrap_or_default(),
            erros: BTreeMap::new(),
        }
    }

    /// The record this form edits.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Field→message validation errors from the last `validar`/`submeter`
    /// call, or mapped back from the backend. Empty means valid.
    #[must_use]
    pub const fn erros(&self) -> &BTreeMap<String, String> {
        &self.erros
    }

    /// Overwrite a field value, clearing its pending error.
    pub fn editar(&mut self, campo: &str, valor: &str) {
        match campo {
            campos::DATA => self.data = valor.to_string(),
            campos::TIPO => self.tipo = valor.to_string(),
            campos::EMISSOR => self.emissor = valor.to_string(),
            campos::VALOR => self.valor = valor.to_string(),
            campos::LINK => self.link = valor.to_string(),
            _ => return,
        }
        self.erros.remove(campo);
    }

    /// Run structural validation, replacing the error map. Returns `true`
    /// when the form is valid.
    pub fn validar(&mut self) -> bool {
        let mut erros = BTreeMap::new();

        let emissor = self.emissor.trim();
        if emissor.is_empty() {
            erros.insert(campos::EMISSOR.to_string(), "Emissor é obrigatório".to_string());
        } else if emissor.chars().count() < 2 {
            erros.insert(
                campos::EMISSOR.to_string(),
                "Emissor deve ter pelo menos 2 caracteres".to_string(),
            );
        }

        if self.tipo.trim().is_empty() {
            erros.insert(campos::TIPO.to_string(), "Tipo é obrigatório".to_string());
        } else if TipoEmissao::parse(&self.tipo).is_none() {
            erros.insert(campos::TIPO.to_string(), "Tipo inválido".to_string());
        }

        if self.valor.trim().is_empty() {
            erros.insert(campos::VALOR.to_string(), "Valor é obrigatório".to_string());
        } else {
            match self.valor.trim().parse::<f64>() {
                Ok(v) if v > 0.0 => {}
                _ => {
                    erros.insert(
                        campos::VALOR.to_string(),
                        "Valor deve ser maior que zero".to_string(),
                    );
                }
            }
        }

        if self.data.trim().is_empty() {
            erros.insert(campos::DATA.to_string(), "Data é obrigatória".to_string());
        } else if NaiveDate::parse_from_str(self.data.trim(), "%Y-%m-%d").is_err() {
            erros.insert(campos::DATA.to_string(), "Data inválida".to_string());
        }

        self.erros = erros;
        self.erros.is_empty()
    }

    /// Validate and build the update body: trimmed issuer, parsed value,
    /// date normalized to midnight UTC, link trimmed or absent, and the
    /// manager name for attribution. `None` when validation fails (errors
    /// are left in [`Self::erros`]; nothing should be sent).
    pub fn submeter(&mut self, gestor_nome: &str) -> Option<EmissaoUpdate> {
        if !self.validar() {
            return None;
        }

        // validar() guarantees these parses succeed
        let dia = NaiveDate::parse_from_str(self.data.trim(), "%Y-%m-%d").ok()?;
        let instante = Utc.from_utc_datetime(&dia.and_time(NaiveTime::MIN));
        let valor = self.valor.trim().parse::<f64>().ok()?;
        let tipo = TipoEmissao::parse(&self.tipo)?;

        let link = self.link.trim();
        Some(EmissaoUpdate {
            data: instante,
            tipo,
            emissor: self.emissor.trim().to_string(),
            valor,
            link: (!link.is_empty()).then(|| link.to_string()),
            gestor_nome: gestor_nome.to_string(),
        })
    }

    /// Distribute backend field errors onto the form. Each pair is the
    /// field name (the last named segment of the backend's location path)
    /// and its message; unknown fields are kept too so no message is lost.
    pub fn aplicar_erros_backend<'a, I>(&mut self, erros: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (campo, msg) in erros {
            self.erros.insert(campo.to_string(), msg.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emissao_exemplo() -> Emissao {
        Emissao {
            id: 42,
            data: "2024-03-10T00:00:00Z".parse().unwrap(),
            tipo: TipoEmissao::Cri,
            emissor: "Acme".to_string(),
            valor: 1_000_000.5,
            link: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn carregar_seeds_string_fields() {
        let form = EditForm::carregar(&emissao_exemplo());
        assert_eq!(form.id(), 42);
        assert_eq!(form.data, "2024-03-10");
        assert_eq!(form.tipo, "CRI");
        assert_eq!(form.valor, "1000000.5");
        assert_eq!(form.link, "");
    }

    #[test]
    fn round_trip_without_edits_has_no_drift() {
        let original = emissao_exemplo();
        let mut form = EditForm::carregar(&original);
        let body = form.submeter("Ana").expect("unmodified form is valid");

        assert_eq!(body.valor, original.valor);
        assert_eq!(body.data.date_naive(), original.data.date_naive());
        assert_eq!(body.tipo, original.tipo);
        assert_eq!(body.emissor, original.emissor);
        assert_eq!(body.link, None);
        assert_eq!(body.gestor_nome, "Ana");
    }

    #[test]
    fn emissor_vazio_is_the_only_error() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::EMISSOR, "");
        assert!(form.submeter("Ana").is_none());
        assert_eq!(form.erros().len(), 1);
        assert_eq!(
            form.erros().get(campos::EMISSOR).map(String::as_str),
            Some("Emissor é obrigatório")
        );
    }

    #[test]
    fn emissor_de_um_caractere_is_rejected() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::EMISSOR, "A");
        assert!(!form.validar());
        assert!(form.erros().contains_key(campos::EMISSOR));
    }

    #[test]
    fn valor_must_be_positive() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::VALOR, "0");
        assert!(!form.validar());
        form.editar(campos::VALOR, "-5");
        assert!(!form.validar());
        form.editar(campos::VALOR, "0.01");
        assert!(form.validar());
    }

    #[test]
    fn tipo_outside_enumeration_is_rejected() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::TIPO, "LCI");
        assert!(!form.validar());
        assert_eq!(
            form.erros().get(campos::TIPO).map(String::as_str),
            Some("Tipo inválido")
        );
    }

    #[test]
    fn editar_clears_the_field_error() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::VALOR, "");
        assert!(!form.validar());
        assert!(form.erros().contains_key(campos::VALOR));

        form.editar(campos::VALOR, "100");
        assert!(!form.erros().contains_key(campos::VALOR));
    }

    #[test]
    fn link_is_trimmed_or_absent() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::LINK, "  https://example.com  ");
        let body = form.submeter("Ana").expect("valid");
        assert_eq!(body.link.as_deref(), Some("https://example.com"));

        form.editar(campos::LINK, "   ");
        let body = form.submeter("Ana").expect("valid");
        assert_eq!(body.link, None);
    }

    #[test]
    fn backend_errors_map_onto_fields_preserving_input() {
        let mut form = EditForm::carregar(&emissao_exemplo());
        form.editar(campos::VALOR, "123.45");
        form.aplicar_erros_backend([("valor", "valor acima do limite permitido")]);

        assert_eq!(
            form.erros().get(campos::VALOR).map(String::as_str),
            Some("valor acima do limite permitido")
        );
        // entered value survives the failure
        assert_eq!(form.valor, "123.45");
    }
}
