//! Identity store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GestorError {
    /// The manager name fails the minimum-length check.
    #[error("nome inválido: {0}")]
    NomeInvalido(String),

    /// Reading or writing the identity file failed.
    #[error("gestor store error: {0}")]
    Storage(String),
}
