use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct GestorStatusResponse {
    identificado: bool,
    gestor: Option<String>,
    note: Option<String>,
}

pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match renda_gestor::load() {
        Some(gestor) => GestorStatusResponse {
            identificado: true,
            gestor: Some(gestor),
            note: None,
        },
        None => GestorStatusResponse {
            identificado: false,
            gestor: None,
            note: Some("rode 'rda gestor login <nome>' para se identificar".into()),
        },
    };
    output(&status, flags.format)
}
