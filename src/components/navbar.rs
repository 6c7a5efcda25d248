use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::Role;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
    pub navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let auth = use_auth_context();
    let session = &auth.session().session;

    let link = |label: &str, target: Route| {
        let navigate = props.navigate.clone();
        let active = props.current == target;
        let class = if active { "nav-link active" } else { "nav-link" };
        let onclick = Callback::from(move |_| navigate.emit(target.clone()));
        html! { <button {class} {onclick}>{label}</button> }
    };

    // The same closed role sets the route guard enforces; the navbar only
    // hides what the guard would bounce anyway.
    let role = session.role();
    let show_movies_admin = matches!(role, Some(Role::Admin) | Some(Role::Superadmin));
    let show_users_admin = matches!(role, Some(Role::Superadmin));

    let auth_controls = if session.is_authenticated() {
        let name = session
            .identity()
            .map(|identity| identity.name.clone())
            .unwrap_or_default();
        let on_logout = {
            let logout = auth.logout.clone();
            let navigate = props.navigate.clone();
            Callback::from(move |_| {
                logout.emit(());
                navigate.emit(Route::Login);
            })
        };
        html! {
            <div class="nav-session">
                <span class="nav-user">{name}</span>
                <button class="nav-link" onclick={on_logout}>{"Logout"}</button>
            </div>
        }
    } else {
        link("Login", Route::Login)
    };

    html! {
        <nav class="navbar">
            <div class="nav-brand" onclick={{
                let navigate = props.navigate.clone();
                Callback::from(move |_| navigate.emit(Route::Home))
            }}>
                {"🎬 Movie Catalog"}
            </div>
            <div class="nav-links">
                {link("Home", Route::Home)}
                {link("Search", Route::Search)}
                { if show_movies_admin { link("Manage Movies", Route::AdminMovies) } else { html!{} } }
                { if show_users_admin { link("Manage Users", Route::AdminUsers) } else { html!{} } }
            </div>
            {auth_controls}
        </nav>
    }
}
