//! # renda-gestor
//!
//! Durable storage for the manager identity: the free-text name attached to
//! every edit for audit attribution. This is an attribution label, not an
//! authentication system — the name is never verified server-side.
//!
//! Priority on load: `RENDA_GESTOR` env var → `~/.renda/gestor` file.

mod error;

pub use error::GestorError;

use std::fs;
use std::path::{Path, PathBuf};

const GESTOR_FILE_NAME: &str = "gestor";
const MIN_NOME_LEN: usize = 3;

/// Validate and normalize a manager name: trimmed, at least 3 characters.
///
/// # Errors
///
/// Returns [`GestorError::NomeInvalido`] when the trimmed name is too short.
pub fn validate_nome(nome: &str) -> Result<String, GestorError> {
    let nome = nome.trim();
    if nome.chars().count() < MIN_NOME_LEN {
        return Err(GestorError::NomeInvalido(format!(
            "deve ter pelo menos {MIN_NOME_LEN} caracteres"
        )));
    }
    Ok(nome.to_string())
}

/// Persist the manager name to `~/.renda/gestor`.
///
/// # Errors
///
/// Returns [`GestorError`] if the name is invalid or the file cannot be
/// written.
pub fn store(nome: &str) -> Result<String, GestorError> {
    store_at(&gestor_path()?, nome)
}

/// Load the stored manager name. Priority: `RENDA_GESTOR` env → file.
/// Whitespace-only content is treated as absent.
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(nome) = std::env::var("RENDA_GESTOR") {
        let nome = nome.trim();
        if !nome.is_empty() {
            return Some(nome.to_string());
        }
    }
    load_from(&gestor_path().ok()?)
}

/// Remove the stored identity, re-triggering the login prompt on next use.
///
/// # Errors
///
/// Returns [`GestorError::Storage`] if the identity file cannot be removed.
pub fn delete() -> Result<(), GestorError> {
    delete_at(&gestor_path()?)
}

// --- Path-parameterized internals ---

fn gestor_path() -> Result<PathBuf, GestorError> {
    dirs::home_dir()
        .map(|h| h.join(".renda").join(GESTOR_FILE_NAME))
        .ok_or_else(|| GestorError::Storage("home directory not found".into()))
}

fn store_at(path: &Path, nome: &str) -> Result<String, GestorError> {
    let nome = validate_nome(nome)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| GestorError::Storage(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, &nome)
        .map_err(|e| GestorError::Storage(format!("write {}: {e}", path.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            tracing::warn!("failed to chmod 0600 {}: {e}", path.display());
        }
    }
    tracing::debug!(path = %path.display(), "gestor registrado");
    Ok(nome)
}

fn load_from(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_at(path: &Path) -> Result<(), GestorError> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| GestorError::Storage(format!("failed to delete {}: {e}", path.display())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gestor_path_is_under_home() {
        let path = gestor_path().expect("should resolve");
        assert!(path.ends_with(".renda/gestor"));
    }

    #[test]
    fn validate_rejects_short_names() {
        assert!(validate_nome("Jo").is_err());
        assert!(validate_nome("  a  ").is_err());
        assert_eq!(validate_nome(" Ana ").expect("valid"), "Ana");
    }

    #[test]
    fn store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("ident").join("gestor");

        let stored = store_at(&path, "  Ryan Calmon ").expect("store");
        assert_eq!(stored, "Ryan Calmon");
        assert_eq!(load_from(&path).as_deref(), Some("Ryan Calmon"));

        delete_at(&path).expect("delete");
        assert!(load_from(&path).is_none());
        delete_at(&path).expect("deleting an absent file is a no-op");
    }

    #[test]
    fn short_name_is_not_stored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("gestor");

        assert!(store_at(&path, " a ").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn whitespace_only_file_is_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("gestor");

        std::fs::write(&path, "  \n ").expect("write");
        assert!(load_from(&path).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn stored_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("ident").join("gestor");
        store_at(&path, "Ana Souza").expect("store");

        let file_mode = fs::metadata(&path).expect("meta").permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        let dir_mode = fs::metadata(path.parent().expect("parent"))
            .expect("meta")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700);
    }
}
