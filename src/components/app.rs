use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};
use yew::prelude::*;
use crate::config::CONFIG;
use crate::context::{Language, LanguageContext};
use crate::models::Route;
use crate::services::current_path;
use super::{ButtonTestScreen, Home, LoginScreen, Link, NotFound, ToastProvider};

#[function_component(App)]
pub fn app() -> Html {
    let language = use_state(|| Language::from_code(&CONFIG.default_language));
    let texts = use_memo(*language, |language| LanguageContext::new(*language));
    let route = use_state(|| Route::from_path(&current_path()));

    // Router: re-leer la ruta en cada popstate (atrás/adelante y push_route)
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: Event| {
                    route.set(Route::from_path(&current_path()));
                }) as Box<dyn FnMut(Event)>);
                if let Err(e) = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                {
                    log::error!("❌ No se pudo registrar popstate: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            let next = language.toggled();
            log::info!("🌐 Idioma: {}", next.as_str());
            language.set(next);
        })
    };

    let page = match *route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <LoginScreen /> },
        Route::ButtonTest => html! { <ButtonTestScreen /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <ContextProvider<LanguageContext> context={(*texts).clone()}>
            <ToastProvider>
                <div class="app">
                    <header class="app-header">
                        <Link to={Route::Home} classes="app-title">{texts.text("app_title")}</Link>
                        <button type="button" class="lang-toggle" onclick={toggle_language}>
                            {texts.text("language_toggle")}
                        </button>
                    </header>
                    <main class="app-main">{page}</main>
                </div>
            </ToastProvider>
        </ContextProvider<LanguageContext>>
    }
}
