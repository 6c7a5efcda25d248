use yew::prelude::*;

use crate::models::Movie;
use crate::routes::Route;
use crate::services::{delete_movie, fetch_movies};
use crate::utils::{format_duration, PAGE_SIZE};

use super::{use_snackbar, ConfirmDialog, PaginationControls};

#[derive(Properties, PartialEq)]
pub struct AdminMoviesPageProps {
    pub navigate: Callback<Route>,
}

#[function_component(AdminMoviesPage)]
pub fn admin_movies_page(props: &AdminMoviesPageProps) -> Html {
    let snackbar = use_snackbar();
    let movies = use_state(Vec::<Movie>::new);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Movie>);
    // Bumped after every delete to refetch the current page.
    let refresh = use_state(|| 0u32);

    {
        let movies = movies.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*page, *refresh), move |(page, _)| {
            let page = *page;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_movies(page, PAGE_SIZE).await {
                    Ok(response) => {
                        movies.set(response.movies);
                        total_pages.set(response.total_pages.unwrap_or(1));
                        error.set(None);
                        loading.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading movies: {}", e);
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
            || ()
        });
    }

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let movies = movies.clone();
        let page = page.clone();
        let refresh = refresh.clone();
        let snackbar = snackbar.clone();
        Callback::from(move |_| {
            let Some(movie) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);

            let movies = movies.clone();
            let page = page.clone();
            let refresh = refresh.clone();
            let snackbar = snackbar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_movie(&movie.id).await {
                    Ok(response) => {
                        // The backend queues the write; show its ack as-is.
                        snackbar.success(
                            response
                                .message
                                .unwrap_or_else(|| "Movie deleted".to_string()),
                        );
                        // Last row of a non-first page gone: step back one.
                        if movies.len() == 1 && *page > 1 {
                            page.set(*page - 1);
                        } else {
                            refresh.set(*refresh + 1);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Delete failed: {}", e);
                        snackbar.error(e);
                    }
                }
            });
        })
    };

    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_new = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::AdminMovieNew))
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let rows = movies.iter().map(|movie| {
        let on_edit = {
            let navigate = props.navigate.clone();
            let id = movie.id.clone();
            Callback::from(move |_| navigate.emit(Route::AdminMovieEdit(id.clone())))
        };
        let on_delete = {
            let pending_delete = pending_delete.clone();
            let movie = movie.clone();
            Callback::from(move |_| pending_delete.set(Some(movie.clone())))
        };
        html! {
            <tr key={movie.id.clone()}>
                <td>{&movie.title}</td>
                <td>{movie.year.map(|year| year.to_string()).unwrap_or_default()}</td>
                <td>{movie.duration.map(format_duration).unwrap_or_default()}</td>
                <td>{movie.rating.map(|rating| format!("{:.1}", rating)).unwrap_or_default()}</td>
                <td class="row-actions">
                    <button class="btn" onclick={on_edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    });

    let dialog_message = (*pending_delete)
        .as_ref()
        .map(|movie| format!("Delete \"{}\"? This cannot be undone.", movie.title))
        .unwrap_or_default();

    html! {
        <div class="admin-page">
            <div class="admin-header">
                <h2>{"Movies"}</h2>
                <button class="btn btn-primary" onclick={on_new}>{"Add movie"}</button>
            </div>

            { if *loading {
                html! { <div class="loading">{"Loading…"}</div> }
            } else if let Some(message) = &*error {
                html! { <div class="page-error">{message.clone()}</div> }
            } else {
                html! {
                    <>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"Year"}</th>
                                    <th>{"Duration"}</th>
                                    <th>{"Rating"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{for rows}</tbody>
                        </table>
                        <PaginationControls page={*page} total_pages={*total_pages} on_page={on_page} />
                    </>
                }
            } }

            <ConfirmDialog
                open={pending_delete.is_some()}
                title={"Delete movie".to_string()}
                message={dialog_message}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}
