// ============================================================================
// USE LOGIN HOOK - estado del formulario + tarea de submit cancelable
// ============================================================================
// La tarea (POST + espera de redirección) se envuelve en `abortable`:
// - un nuevo submit aborta la anterior
// - al desmontar se aborta y se dejan de aplicar cambios de estado
// ============================================================================

use futures::future::{abortable, AbortHandle};
use yew::prelude::*;
use crate::state::{LoginAction, LoginFormState};
use crate::viewmodels::LoginViewModel;

pub struct UseLoginHandle {
    pub state: UseReducerHandle<LoginFormState>,
    pub set_email: Callback<String>,
    pub set_password: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_login() -> UseLoginHandle {
    let state = use_reducer(LoginFormState::default);
    let viewmodel = use_memo((), |_| LoginViewModel::browser());
    let task = use_mut_ref(|| None::<AbortHandle>);
    let mounted = use_mut_ref(|| false);

    {
        let task = task.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || {
                *mounted.borrow_mut() = false;
                if let Some(handle) = task.borrow_mut().take() {
                    log::info!("🛑 Pantalla de login desmontada, se cancela el submit pendiente");
                    handle.abort();
                }
            }
        });
    }

    let set_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |email: String| dispatcher.dispatch(LoginAction::SetEmail(email)))
    };

    let set_password = {
        let dispatcher = state.dispatcher();
        Callback::from(move |password: String| {
            dispatcher.dispatch(LoginAction::SetPassword(password))
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            if state.loading {
                log::warn!("⏳ Login en curso, submit ignorado");
                return;
            }

            if let Some(previous) = task.borrow_mut().take() {
                previous.abort();
            }

            let credentials = state.credentials();
            let dispatcher = state.dispatcher();
            let mounted = mounted.clone();
            let viewmodel = viewmodel.clone();
            let (future, handle) = abortable(async move {
                viewmodel
                    .submit(credentials, move |action| {
                        if *mounted.borrow() {
                            dispatcher.dispatch(action);
                        }
                    })
                    .await
            });
            *task.borrow_mut() = Some(handle);

            wasm_bindgen_futures::spawn_local(async move {
                if future.await.is_err() {
                    log::info!("🛑 Submit de login cancelado");
                }
            });
        })
    };

    UseLoginHandle {
        state,
        set_email,
        set_password,
        submit,
    }
}

