use crate::config::Config;
use crate::model::{LoginError, Session};
use crate::routes::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginPageProps {
    pub session: Session,
    pub on_session_change: Callback<Session>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<LoginError>);
    let navigator = use_navigator();

    // Already logged in: nothing to do here.
    if props.session.is_admin() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let session = props.session;
        let on_session_change = props.on_session_change.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = session;
            match next.login(&Config::new(), &email, &password) {
                Ok(()) => {
                    log::info!("admin login accepted");
                    on_session_change.emit(next);
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Home);
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    html! {
        <div class="futsal-login">
            <h2 class="futsal-login__title">{"Restricted area"}</h2>
            <p class="futsal-login__subtitle">{"Authorized administrators only"}</p>

            <form onsubmit={on_submit}>
                <label class="futsal-editor__label">{"Email"}</label>
                <input
                    class="futsal-editor__input"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    placeholder="Enter your email"
                    required={true}
                />
                <label class="futsal-editor__label">{"Password"}</label>
                <input
                    class="futsal-editor__input"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                    placeholder="••••••••"
                    required={true}
                />

                if error.is_some() {
                    <p class="futsal-login__error">{"Invalid credentials"}</p>
                }

                <button class="futsal-login__submit" type="submit">
                    {"Sign in as admin"}
                </button>
            </form>
        </div>
    }
}
