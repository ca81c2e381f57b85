use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    removido: bool,
}

pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let tinha = renda_gestor::load().is_some();
    renda_gestor::delete()?;
    output(&LogoutResponse { removido: tinha }, flags.format)
}
