// ============================================================================
// NAVEGACIÓN CLIENT-SIDE (History API)
// ============================================================================
// pushState no dispara `popstate`, así que se despacha uno sintético para que
// el router del App vuelva a leer `location.pathname`.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{window, Event};
use crate::error::NavigationError;
use crate::models::Route;
use super::traits::Navigator;

fn js_error(e: JsValue) -> NavigationError {
    NavigationError(format!("{:?}", e))
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| Route::Home.path().to_string())
}

pub fn push_route(path: &str) -> Result<(), NavigationError> {
    let win = window().ok_or_else(|| NavigationError("window no disponible".to_string()))?;
    let history = win.history().map_err(js_error)?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(js_error)?;

    let event = Event::new("popstate").map_err(js_error)?;
    win.dispatch_event(&event).map_err(js_error)?;
    log::info!("🧭 Navegación a {}", path);
    Ok(())
}

#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to_root(&self) -> Result<(), NavigationError> {
        push_route(Route::Home.path())
    }
}
