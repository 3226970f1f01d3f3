use yew::prelude::*;
use crate::services::Notifier;

/// Acceso al `ToastProvider` más cercano
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub notify: Callback<String>,
}

impl Notifier for ToastHandle {
    fn success(&self, message: &str) {
        self.notify.emit(message.to_string());
    }
}

#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}
