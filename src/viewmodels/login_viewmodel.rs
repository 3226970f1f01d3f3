// ============================================================================
// LOGIN VIEWMODEL - LÓGICA DEL LOGIN DE EMPRESA
// ============================================================================
// Ciclo de un submit:
//   Started -> POST -> (guardar `data` si success) -> Settled(status) -> Finished
//   y, solo si success, espera `redirect_delay_ms` y navega a la raíz.
// Los cambios de estado salen por `dispatch`; el hook decide si aplicarlos.
// ============================================================================

use std::rc::Rc;
use serde_json::Value;
use crate::config::CONFIG;
use crate::error::StorageError;
use crate::models::{Credentials, LoginRequest};
use crate::services::{
    ApiClient, BrowserNavigator, Delay, GlooDelay, KeyValueStore, LocalStore, LoginApi, Navigator,
};
use crate::state::{LoginAction, LoginStatus};

/// Emite `Finished` al salir del bloque, también si la tarea se aborta a mitad
struct SettleGuard<'a, F: Fn(LoginAction)> {
    dispatch: &'a F,
}

impl<F: Fn(LoginAction)> Drop for SettleGuard<'_, F> {
    fn drop(&mut self) {
        (self.dispatch)(LoginAction::Finished);
    }
}

pub struct LoginViewModel {
    api: Rc<dyn LoginApi>,
    store: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
    delay: Rc<dyn Delay>,
    storage_key: String,
    redirect_delay_ms: u32,
}

impl LoginViewModel {
    pub fn new(
        api: Rc<dyn LoginApi>,
        store: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
        delay: Rc<dyn Delay>,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
            delay,
            storage_key: CONFIG.session_storage_key.clone(),
            redirect_delay_ms: CONFIG.redirect_delay_ms,
        }
    }

    /// ViewModel con las implementaciones del navegador
    pub fn browser() -> Self {
        Self::new(
            Rc::new(ApiClient::new()),
            Rc::new(LocalStore),
            Rc::new(BrowserNavigator),
            Rc::new(GlooDelay),
        )
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_redirect_delay(mut self, delay_ms: u32) -> Self {
        self.redirect_delay_ms = delay_ms;
        self
    }

    pub async fn submit<F>(&self, credentials: Credentials, dispatch: F) -> LoginStatus
    where
        F: Fn(LoginAction),
    {
        dispatch(LoginAction::Started);

        let status = {
            let _settle = SettleGuard { dispatch: &dispatch };
            let status = self.authenticate(&credentials).await;
            dispatch(LoginAction::Settled(status.clone()));
            status
        };

        if status == LoginStatus::Success {
            self.redirect_to_root().await;
        }
        status
    }

    async fn authenticate(&self, credentials: &Credentials) -> LoginStatus {
        log::info!("🔐 Login de empresa: {}", credentials.email);

        match self.api.login(&LoginRequest::from(credentials)).await {
            Ok(response) if response.success => {
                self.persist_session(response.data.as_ref());
                log::info!("✅ Login exitoso: {}", credentials.email);
                LoginStatus::Success
            }
            Ok(response) => {
                let reason = response.rejection_reason();
                log::warn!(
                    "⚠️ Login rechazado para {}: {}",
                    credentials.email,
                    reason.as_deref().unwrap_or("sin mensaje")
                );
                LoginStatus::Rejected { reason }
            }
            Err(e) => {
                log::error!("❌ Error de conexión en login: {}", e);
                LoginStatus::TransportFault
            }
        }
    }

    // `data` ausente se guarda como "null"
    fn persist_session(&self, data: Option<&Value>) {
        let result = serde_json::to_string(&data)
            .map_err(|e| StorageError::Serialize(e.to_string()))
            .and_then(|json| self.store.set(&self.storage_key, &json));
        match result {
            Ok(()) => log::info!("💾 Datos de empresa guardados en '{}'", self.storage_key),
            Err(e) => log::warn!("⚠️ {}", e),
        }
    }

    async fn redirect_to_root(&self) {
        log::info!("⏳ Redirección a la raíz en {} ms", self.redirect_delay_ms);
        self.delay.wait(self.redirect_delay_ms).await;
        if let Err(e) = self.navigator.go_to_root() {
            log::error!("❌ {}", e);
        }
    }
}
