use yew::prelude::*;
use crate::config::CONFIG;
use crate::context::use_texts;
use crate::models::Route;
use crate::services::{KeyValueStore, LocalStore};
use super::Link;

#[function_component(Home)]
pub fn home() -> Html {
    let texts = use_texts();
    let has_session = LocalStore.get(&CONFIG.session_storage_key).is_some();

    let session_text = if has_session {
        texts.text("home_session_found")
    } else {
        texts.text("home_no_session")
    };

    html! {
        <div class="home-screen">
            <div class="card">
                <h1>{texts.text("home_title")}</h1>
                <p class="session-status">{session_text}</p>
                <nav class="home-links">
                    <Link to={Route::Login} classes="btn btn-primary">{texts.text("home_login_link")}</Link>
                    <Link to={Route::ButtonTest} classes="btn btn-secondary">{texts.text("home_button_test_link")}</Link>
                </nav>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let texts = use_texts();
    html! {
        <div class="card not-found">
            <h1>{"404"}</h1>
            <p>{texts.text("not_found")}</p>
            <Link to={Route::Home}>{texts.text("home_title")}</Link>
        </div>
    }
}
