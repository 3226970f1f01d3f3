use yew::prelude::*;
use crate::context::use_texts;
use crate::hooks::use_toast;
use crate::models::ButtonVariant;
use crate::viewmodels::activate_button;

/// Cuatro botones, cada clic loguea y muestra un toast
#[function_component(ButtonTestScreen)]
pub fn button_test_screen() -> Html {
    let texts = use_texts();
    let toast = use_toast();

    let buttons = ButtonVariant::ALL.iter().map(|&variant| {
        let texts = texts.clone();
        let toast = toast.clone();
        let onclick = Callback::from(move |_: MouseEvent| match &toast {
            Some(handle) => activate_button(variant, handle, &texts),
            None => log::warn!("⚠️ Botón {} sin ToastProvider", variant.label()),
        });

        html! {
            <button key={variant.label()} type="button" class={variant.css_class()} {onclick}>
                {variant.label()}
            </button>
        }
    });

    html! {
        <div class="button-test-screen">
            <div class="card">
                <h1>{texts.text("button_test_title")}</h1>
                <p>{texts.text("button_test_subtitle")}</p>
                <div class="button-row">
                    { for buttons }
                </div>
            </div>
        </div>
    }
}
