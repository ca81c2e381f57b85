use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    gestor: String,
}

pub fn run(nome: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gestor = renda_gestor::store(nome)?;
    output(&LoginResponse { gestor }, flags.format)
}
