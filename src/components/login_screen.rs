use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::context::use_texts;
use crate::hooks::use_login;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let texts = use_texts();
    let login = use_login();
    let state = login.state.clone();

    let on_email = {
        let set_email = login.set_email.clone();
        Callback::from(move |e: InputEvent| {
            set_email.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let set_password = login.set_password.clone();
        Callback::from(move |e: InputEvent| {
            set_password.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    // Los `required` del input bloquean el submit vacío
    let on_submit = {
        let submit = login.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let status_line = state.status.message(&texts).map(|message| {
        html! {
            <div class={state.status.css_class()} role="alert">{message}</div>
        }
    });

    let button_text = if state.loading {
        texts.text("login_loading")
    } else {
        texts.text("login_button")
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="login-header">
                    <div class="logo-icon">{"🏢"}</div>
                    <h1>{texts.text("login_title")}</h1>
                    <p>{texts.text("login_subtitle")}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{texts.text("email")}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder={texts.text("email_placeholder")}
                            value={state.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{texts.text("password")}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder={texts.text("password_placeholder")}
                            value={state.password.clone()}
                            oninput={on_password}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn btn-primary btn-login" disabled={state.loading}>
                        <span class="btn-text">{button_text}</span>
                    </button>

                    { for status_line }
                </form>
            </div>
        </div>
    }
}
