use std::rc::Rc;
use yew::Reducible;
use crate::models::Toast;

/// Más allá de este número se descartan los toasts más antiguos
pub const MAX_VISIBLE_TOASTS: usize = 5;

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(toast) => {
                self.toasts.push(toast);
                if self.toasts.len() > MAX_VISIBLE_TOASTS {
                    let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
                    self.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|t| t.id != id),
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
