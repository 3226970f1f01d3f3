// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::error::LoginError;
use crate::models::{LoginRequest, LoginResponse};
use super::traits::LoginApi;

#[derive(Clone)]
pub struct ApiClient {
    login_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_login_url(CONFIG.login_url())
    }

    pub fn with_login_url(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl LoginApi for ApiClient {
    /// Login de empresa. Sin reintentos ni timeout.
    ///
    /// Un status HTTP de error no es un fallo de transporte por sí solo: el backend
    /// manda `{success: false, message}` con 401/403 y ese cuerpo es lo que cuenta.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        log::info!("🔐 POST {} ({})", self.login_url, request.email);

        let response = Request::post(&self.login_url)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| LoginError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;

        if !response.ok() {
            log::warn!("⚠️ HTTP {} {} en login", response.status(), response.status_text());
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;
        LoginResponse::from_body(&body)
    }
}

