pub mod emissao;
pub mod gestor;

pub use emissao::{EmissaoCommands, ListArgs, UpdateArgs};
pub use gestor::GestorCommands;
