// ============================================================================
// COMPANY PORTAL - FRONTEND YEW (RUST + WASM)
// ============================================================================
// - components: pantallas (login, test de botones) + shell (router, toasts)
// - hooks: estado de UI y tareas async ligadas al ciclo de vida del componente
// - viewmodels: lógica de pantalla, sin acceso directo al navegador
// - services: HTTP, localStorage, navegación y timers (implementan los traits)
// - state: reducers de formulario y de notificaciones
// - models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;

#[cfg(test)]
pub(crate) mod testing;
