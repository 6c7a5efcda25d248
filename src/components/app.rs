use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::{use_auth_context, AuthContextProvider};
use crate::routes::{decide, GuardOutcome, Route};

use super::{
    AdminMoviesPage, AdminUsersPage, HomePage, LoginScreen, MovieDetail, MovieForm, Navbar,
    SearchPage, SnackbarProvider, UserForm,
};

fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path)
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <SnackbarProvider>
                <Shell />
            </SnackbarProvider>
        </AuthContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth_context();
    let route = use_state(current_route);
    // Where the user was headed when the guard sent them to login.
    let login_from = use_state(|| None::<Route>);

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            if let Some(win) = web_sys::window() {
                if let Ok(history) = win.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&target.to_path()));
                }
            }
            route.set(target);
        })
    };

    // Back/forward buttons. Registered once on mount; forget() keeps the
    // closure alive for the lifetime of the app.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            closure.forget();
            || ()
        });
    }

    // Redirects are side effects of the guard decision, re-run whenever the
    // route or the session changes (e.g. logout on a mounted admin screen).
    {
        let navigate = navigate.clone();
        let login_from = login_from.clone();
        let session = auth.session().clone();
        use_effect_with(((*route).clone(), session), move |(current, session)| {
            match decide(&current.requirement(), current, session) {
                GuardOutcome::RedirectToLogin { from } => {
                    log::info!("🔒 Not authenticated, redirecting to login");
                    login_from.set(Some(from));
                    navigate.emit(Route::Login);
                }
                GuardOutcome::RedirectToHome => {
                    log::info!("🔒 Role not allowed here, redirecting home");
                    navigate.emit(Route::Home);
                }
                GuardOutcome::Pending | GuardOutcome::Allow => {}
            }

            // Already (or freshly) logged in on the login screen: return to
            // the recorded origin, or home.
            if *current == Route::Login && session.session.is_authenticated() {
                let target = (*login_from).clone().unwrap_or(Route::Home);
                login_from.set(None);
                navigate.emit(target);
            }
            || ()
        });
    }

    let content = match decide(&route.requirement(), &route, auth.session()) {
        // Restore still in flight: render nothing rather than flash a
        // guarded screen or a wrong redirect.
        GuardOutcome::Pending => html! {},
        GuardOutcome::Allow => render_route(&route, &navigate),
        // The effect above performs the actual navigation.
        GuardOutcome::RedirectToLogin { .. } | GuardOutcome::RedirectToHome => html! {},
    };

    html! {
        <div class="app">
            <Navbar current={(*route).clone()} navigate={navigate.clone()} />
            <main class="app-content">{content}</main>
        </div>
    }
}

fn render_route(route: &Route, navigate: &Callback<Route>) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <HomePage navigate={navigate.clone()} /> },
        Route::Search => html! { <SearchPage navigate={navigate.clone()} /> },
        Route::MovieDetail(id) => html! { <MovieDetail id={id.clone()} /> },
        Route::Login => html! { <LoginScreen /> },
        Route::AdminMovies => html! { <AdminMoviesPage navigate={navigate.clone()} /> },
        Route::AdminMovieNew => html! { <MovieForm id={None::<String>} navigate={navigate.clone()} /> },
        Route::AdminMovieEdit(id) => {
            html! { <MovieForm id={Some(id.clone())} navigate={navigate.clone()} /> }
        }
        Route::AdminUsers => html! { <AdminUsersPage navigate={navigate.clone()} /> },
        Route::AdminUserNew => html! { <UserForm id={None::<String>} navigate={navigate.clone()} /> },
        Route::AdminUserEdit(id) => {
            html! { <UserForm id={Some(id.clone())} navigate={navigate.clone()} /> }
        }
    }
}
