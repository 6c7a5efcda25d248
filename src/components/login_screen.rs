use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    // Local validation message; collaborator errors come from the handle.
    let field_error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let field_error = field_error.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    field_error.set(Some("Please fill in both fields".to_string()));
                    return;
                }

                field_error.set(None);
                login.emit((email, password));
            }
        })
    };

    // The form stays editable after a rejected login; only the message
    // changes.
    let error = (*field_error)
        .clone()
        .or_else(|| auth.state.error.clone());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Welcome back"}</h1>
                    <p>{"Sign in to manage the catalog"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                        />
                    </div>

                    { match error {
                        Some(message) => html! { <div class="form-error">{message}</div> },
                        None => html! {},
                    } }

                    <button type="submit" class="btn btn-primary" disabled={auth.state.busy}>
                        { if auth.state.busy { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
