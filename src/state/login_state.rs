// ============================================================================
// LOGIN STATE - Estado del formulario de login (reducer)
// ============================================================================

use std::rc::Rc;
use yew::Reducible;
use crate::context::LanguageContext;
use crate::models::Credentials;

/// Prefijo fijo de los mensajes de rechazo del backend
pub const ERROR_PREFIX: &str = "❌ ";

/// Resultado del último submit
#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoginStatus {
    #[default]
    Idle,
    Success,
    /// El backend respondió `success: false`
    Rejected { reason: Option<String> },
    /// Red caída o respuesta ilegible
    TransportFault,
}

impl LoginStatus {
    /// Texto a mostrar bajo el formulario
    pub fn message(&self, texts: &LanguageContext) -> Option<String> {
        match self {
            LoginStatus::Idle => None,
            LoginStatus::Success => Some(texts.text("login_success")),
            LoginStatus::Rejected { reason } => {
                let reason = reason
                    .clone()
                    .unwrap_or_else(|| texts.text("login_error_generic"));
                Some(format!("{}{}", ERROR_PREFIX, reason))
            }
            LoginStatus::TransportFault => Some(texts.text("connection_error")),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LoginStatus::Idle => "status",
            LoginStatus::Success => "status success",
            LoginStatus::Rejected { .. } | LoginStatus::TransportFault => "status error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    Started,
    Settled(LoginStatus),
    Finished,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub status: LoginStatus,
}

impl LoginFormState {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn apply(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => self.email = email,
            LoginAction::SetPassword(password) => self.password = password,
            LoginAction::Started => {
                self.loading = true;
                self.status = LoginStatus::Idle;
            }
            LoginAction::Settled(status) => self.status = status,
            LoginAction::Finished => self.loading = false,
        }
    }
}

impl Reducible for LoginFormState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Language;

    #[test]
    fn keystrokes_only_touch_their_field() {
        let mut state = LoginFormState::default();
        state.apply(LoginAction::SetEmail("a@b.c".to_string()));
        state.apply(LoginAction::SetPassword("pw".to_string()));
        assert_eq!(state.email, "a@b.c");
        assert_eq!(state.password, "pw");
        assert!(!state.loading);
        assert_eq!(state.status, LoginStatus::Idle);
    }

    #[test]
    fn started_sets_loading_and_clears_previous_status() {
        let mut state = LoginFormState {
            status: LoginStatus::TransportFault,
            ..LoginFormState::default()
        };
        state.apply(LoginAction::Started);
        assert!(state.loading);
        assert_eq!(state.status, LoginStatus::Idle);
    }

    #[test]
    fn finished_only_resets_loading() {
        let mut state = LoginFormState::default();
        state.apply(LoginAction::SetEmail("a@b.c".to_string()));
        state.apply(LoginAction::Started);
        state.apply(LoginAction::Settled(LoginStatus::Success));
        state.apply(LoginAction::Finished);
        assert!(!state.loading);
        assert_eq!(state.status, LoginStatus::Success);
        assert_eq!(state.email, "a@b.c");
    }

    #[test]
    fn reduce_returns_new_state() {
        let state = Rc::new(LoginFormState::default());
        let next = state.clone().reduce(LoginAction::Started);
        assert!(!state.loading);
        assert!(next.loading);
    }

    #[test]
    fn rejection_message_uses_prefix_and_server_reason() {
        let texts = LanguageContext::new(Language::French);
        let status = LoginStatus::Rejected {
            reason: Some("invalid credentials".to_string()),
        };
        assert_eq!(
            status.message(&texts).as_deref(),
            Some("❌ invalid credentials")
        );
    }

    #[test]
    fn rejection_without_reason_uses_localized_fallback() {
        let texts = LanguageContext::new(Language::Spanish);
        let status = LoginStatus::Rejected { reason: None };
        assert_eq!(
            status.message(&texts),
            Some(format!("{}{}", ERROR_PREFIX, texts.text("login_error_generic")))
        );
    }

    #[test]
    fn visual_treatment_comes_from_variant() {
        assert_eq!(LoginStatus::Success.css_class(), "status success");
        assert_eq!(LoginStatus::TransportFault.css_class(), "status error");
        assert_eq!(LoginStatus::Rejected { reason: None }.css_class(), "status error");
        assert_eq!(LoginStatus::Idle.message(&LanguageContext::default()), None);
    }
}
