// ============================================================================
// CAPACIDADES INYECTADAS - red, storage, navegación, timers, notificaciones
// ============================================================================
// Las pantallas reciben estas piezas en vez de tocar `window` directamente,
// así los viewmodels se prueban fuera del navegador.
// ============================================================================

use async_trait::async_trait;
use crate::error::{LoginError, NavigationError, StorageError};
use crate::models::{LoginRequest, LoginResponse};

/// Endpoint de login de empresa
#[async_trait(?Send)]
pub trait LoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError>;
}

/// Almacenamiento clave-valor persistente del cliente
pub trait KeyValueStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn get(&self, key: &str) -> Option<String>;
}

pub trait Navigator {
    /// Transición client-side a la raíz de la app
    fn go_to_root(&self) -> Result<(), NavigationError>;
}

/// Superficie de notificaciones transitorias (fire-and-forget)
pub trait Notifier {
    fn success(&self, message: &str);
}

#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration_ms: u32);
}
