use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub login_path: String,
    pub session_storage_key: String,
    pub redirect_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub default_language: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            login_path: "/api/company/login".to_string(),
            session_storage_key: "company".to_string(),
            redirect_delay_ms: 1000,
            toast_duration_ms: 3000,
            default_language: "FR".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            login_path: option_env!("LOGIN_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.login_path),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            redirect_delay_ms: option_env!("REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .map(str::to_string)
                .unwrap_or(defaults.default_language),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL completa del endpoint de login de empresa
    pub fn login_url(&self) -> String {
        let path = self.login_path.trim_start_matches('/');
        format!("{}/{}", self.backend_url.trim_end_matches('/'), path)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
