// ============================================================================
// ERRORES DE LOS SERVICIOS
// ============================================================================

use thiserror::Error;

/// Fallo de transporte en el login: red caída, cuerpo ilegible o con forma inesperada
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("Request error: {0}")]
    Request(String),
    #[error("Parse error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("Error serializando datos: {0}")]
    Serialize(String),
    #[error("Error guardando en localStorage: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error de navegación: {0}")]
pub struct NavigationError(pub String);
