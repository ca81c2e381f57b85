//! pt-BR display formatting: BRL currency, calendar dates, abbreviated
//! volumes, and month labels.

use chrono::{DateTime, NaiveDate, Utc};

/// Portuguese month abbreviations, indexed by `mes - 1`.
pub const MESES_ABREV: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Abbreviation for a 1-indexed calendar month, or `None` out of range.
#[must_use]
pub fn mes_abrev(mes: u32) -> Option<&'static str> {
    MESES_ABREV.get(mes.checked_sub(1)? as usize).copied()
}

/// Format a monetary value as BRL currency: `R$ 1.234.567,89`.
#[must_use]
pub fn moeda(valor: f64) -> String {
    let negativo = valor < 0.0;
    let centavos = (valor.abs() * 100.0).round() as u128;
    let inteiro = centavos / 100;
    let fracao = centavos % 100;

    let digits = inteiro.to_string();
    let mut agrupado = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(ch);
    }

    let sinal = if negativo { "-" } else { "" };
    format!("{sinal}R$ {agrupado},{fracao:02}")
}

/// Threshold-abbreviated volume label: billions (`R$ 1.2B`), millions
/// (`R$ 3.4M`), otherwise full currency.
#[must_use]
pub fn volume_abreviado(valor: f64) -> String {
    if valor >= 1e9 {
        format!("R$ {:.1}B", valor / 1e9)
    } else if valor >= 1e6 {
        format!("R$ {:.1}M", valor / 1e6)
    } else {
        moeda(valor)
    }
}

/// Calendar date in pt-BR order: `dd/mm/yyyy`.
#[must_use]
pub fn data_br(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Timestamp in pt-BR order: `dd/mm/yyyy HH:MM:SS`.
#[must_use]
pub fn data_hora_br(instante: DateTime<Utc>) -> String {
    instante.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Truncate a name beyond `max` characters, appending `...`.
#[must_use]
pub fn truncar(nome: &str, max: usize) -> String {
    if nome.chars().count() <= max {
        return nome.to_string();
    }
    let mut out: String = nome.chars().take(max).collect();
    out.push_str("...");
    out
}
