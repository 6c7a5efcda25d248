use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Role, UserInput};
use crate::routes::Route;
use crate::services::{create_user, fetch_user, update_user};

use super::use_snackbar;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// None = create, Some = edit.
    pub id: Option<String>,
    pub navigate: Callback<Route>,
}

#[derive(Clone, PartialEq)]
struct FormFields {
    name: String,
    email: String,
    role: Role,
    password: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::User,
            password: String::new(),
        }
    }
}

fn role_from_value(value: &str) -> Role {
    match value {
        "admin" => Role::Admin,
        "superadmin" => Role::Superadmin,
        _ => Role::User,
    }
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let snackbar = use_snackbar();
    let fields = use_state(FormFields::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    {
        let fields = fields.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_user(&id).await {
                        Ok(user) => fields.set(FormFields {
                            name: user.name,
                            email: user.email,
                            role: user.role,
                            password: String::new(),
                        }),
                        Err(e) => {
                            log::error!("❌ Error loading user for edit: {}", e);
                            error.set(Some(e));
                        }
                    }
                });
            }
            || ()
        });
    }

    let set_field = |apply: fn(&mut FormFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*fields).clone();
                apply(&mut next, input.value());
                fields.set(next);
            }
        })
    };

    let on_role = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*fields).clone();
                next.role = role_from_value(&select.value());
                fields.set(next);
            }
        })
    };

    let is_create = props.id.is_none();

    let on_submit = {
        let fields = fields.clone();
        let error = error.clone();
        let saving = saving.clone();
        let snackbar = snackbar.clone();
        let navigate = props.navigate.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*fields).clone();

            if current.name.trim().is_empty() || current.email.trim().is_empty() {
                error.set(Some("Name and email are required".to_string()));
                return;
            }
            if id.is_none() && current.password.is_empty() {
                error.set(Some("Password is required for a new user".to_string()));
                return;
            }

            let input = UserInput {
                name: current.name.trim().to_string(),
                email: current.email.trim().to_string(),
                role: current.role,
                password: if current.password.is_empty() {
                    None
                } else {
                    Some(current.password.clone())
                },
            };

            error.set(None);
            saving.set(true);

            let error = error.clone();
            let saving = saving.clone();
            let snackbar = snackbar.clone();
            let navigate = navigate.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &id {
                    Some(id) => update_user(id, &input).await,
                    None => create_user(&input).await,
                };
                saving.set(false);
                match result {
                    Ok(response) => {
                        snackbar.success(
                            response
                                .message
                                .unwrap_or_else(|| "User saved".to_string()),
                        );
                        navigate.emit(Route::AdminUsers);
                    }
                    Err(e) => {
                        log::error!("❌ Save failed: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::AdminUsers))
    };

    let heading = if is_create { "Add user" } else { "Edit user" };
    let password_label = if is_create {
        "Password"
    } else {
        "Password (leave empty to keep)"
    };

    html! {
        <div class="form-page">
            <h2>{heading}</h2>
            <form class="entity-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input id="name" type="text" value={fields.name.clone()}
                        oninput={set_field(|f, v| f.name = v)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={fields.email.clone()}
                        oninput={set_field(|f, v| f.email = v)} />
                </div>
                <div class="form-group">
                    <label for="role">{"Role"}</label>
                    <select id="role" onchange={on_role}>
                        <option value="user" selected={fields.role == Role::User}>{"user"}</option>
                        <option value="admin" selected={fields.role == Role::Admin}>{"admin"}</option>
                        <option value="superadmin" selected={fields.role == Role::Superadmin}>{"superadmin"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="password">{password_label}</label>
                    <input id="password" type="password" value={fields.password.clone()}
                        oninput={set_field(|f, v| f.password = v)} />
                </div>

                { match &*error {
                    Some(message) => html! { <div class="form-error">{message.clone()}</div> },
                    None => html! {},
                } }

                <div class="form-actions">
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        { if *saving { "Saving…" } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
