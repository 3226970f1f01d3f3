// ============================================================================
// RUTAS DE LA APP
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    ButtonTest,
    NotFound,
}

impl Route {
    /// Resolver una ruta a partir de `location.pathname`
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/login" => Route::Login,
            "/button-test" => Route::ButtonTest,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::ButtonTest => "/button-test",
            Route::NotFound => "/404",
        }
    }
}
