// ============================================================================
// TOASTS - notificaciones transitorias con auto-cierre
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::hooks::ToastHandle;
use crate::models::Toast;
use crate::state::{ToastAction, ToastState};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or(CONFIG.toast_duration_ms)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let next_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = state.dispatcher();
        use_callback(
            props.duration_ms,
            move |message: String, duration_ms| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next = next.wrapping_add(1);
                    *next
                };
                dispatcher.dispatch(ToastAction::Push(Toast { id, message }));

                let dispatcher = dispatcher.clone();
                Timeout::new(*duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            },
        )
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        use_callback((), move |id: u32, _| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let handle = ToastHandle { notify };

    let toasts = state.toasts.iter().map(|toast| {
        let id = toast.id;
        let onclick = dismiss.reform(move |_: MouseEvent| id);
        html! {
            <div key={id} class="toast toast-success" role="status" {onclick}>
                <span class="toast-icon">{"✅"}</span>
                <span class="toast-message">{toast.message.clone()}</span>
            </div>
        }
    });

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-container">
                { for toasts }
            </div>
        </ContextProvider<ToastHandle>>
    }
}
