use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    French,
    Spanish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::French => "FR",
            Language::Spanish => "ES",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "ES" => Language::Spanish,
            _ => Language::French,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::French => Language::Spanish,
            Language::Spanish => Language::French,
        }
    }
}

const FRENCH: &[(&str, &str)] = &[
    ("app_title", "Company Portal"),
    ("language_toggle", "ES"),
    // Home
    ("home_title", "Accueil"),
    ("home_login_link", "Connexion entreprise"),
    ("home_button_test_link", "Page de test des boutons"),
    ("home_session_found", "Session entreprise enregistrée"),
    ("home_no_session", "Aucune session enregistrée"),
    ("not_found", "Page introuvable"),
    // Login
    ("login_title", "Connexion entreprise"),
    ("login_subtitle", "Accédez à votre espace entreprise"),
    ("email", "Email"),
    ("email_placeholder", "contact@entreprise.fr"),
    ("password", "Mot de passe"),
    ("password_placeholder", "Votre mot de passe"),
    ("login_button", "Se connecter"),
    ("login_loading", "Connexion..."),
    ("login_success", "✅ Connexion réussie ! Redirection..."),
    ("login_error_generic", "Identifiants incorrects"),
    ("connection_error", "❌ Erreur de connexion au serveur"),
    // Button test
    ("button_test_title", "Test des boutons"),
    ("button_test_subtitle", "Chaque clic affiche une notification"),
    ("button_clicked", "Bouton {} cliqué !"),
];

const SPANISH: &[(&str, &str)] = &[
    ("app_title", "Company Portal"),
    ("language_toggle", "FR"),
    // Home
    ("home_title", "Inicio"),
    ("home_login_link", "Acceso empresa"),
    ("home_button_test_link", "Página de prueba de botones"),
    ("home_session_found", "Sesión de empresa guardada"),
    ("home_no_session", "No hay sesión guardada"),
    ("not_found", "Página no encontrada"),
    // Login
    ("login_title", "Acceso empresa"),
    ("login_subtitle", "Accede a tu espacio de empresa"),
    ("email", "Email"),
    ("email_placeholder", "contacto@empresa.es"),
    ("password", "Contraseña"),
    ("password_placeholder", "Tu contraseña"),
    ("login_button", "Iniciar sesión"),
    ("login_loading", "Conectando..."),
    ("login_success", "✅ ¡Login exitoso! Redirigiendo..."),
    ("login_error_generic", "Credenciales incorrectas"),
    ("connection_error", "❌ Error de conexión con el servidor"),
    // Button test
    ("button_test_title", "Prueba de botones"),
    ("button_test_subtitle", "Cada clic muestra una notificación"),
    ("button_clicked", "¡Botón {} pulsado!"),
];

/// Textos localizados de la UI, compartidos vía `ContextProvider`
#[derive(Clone, Debug)]
pub struct LanguageContext {
    pub language: Language,
    texts: Rc<HashMap<&'static str, &'static str>>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        let table = match language {
            Language::French => FRENCH,
            Language::Spanish => SPANISH,
        };
        Self {
            language,
            texts: Rc::new(table.iter().copied().collect()),
        }
    }

    /// Texto para `key`; si no hay traducción se devuelve la clave
    pub fn text(&self, key: &str) -> String {
        self.texts
            .get(key)
            .map(|t| t.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Igual que `text` sustituyendo el primer `{}` por `arg`
    pub fn text_with(&self, key: &str, arg: &str) -> String {
        self.text(key).replacen("{}", arg, 1)
    }
}

/// Contexto de idioma actual (francés si no hay provider)
#[hook]
pub fn use_texts() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}
