use yew::prelude::*;

use crate::models::Movie;
use crate::routes::Route;
use crate::services::fetch_movies;
use crate::utils::PAGE_SIZE;

use super::{MovieCard, PaginationControls};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let movies = use_state(Vec::<Movie>::new);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let movies = movies.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*page, move |page| {
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

    let on_select = {
        let navigate = props.navigate.clone();
        Callback::from(move |id: String| navigate.emit(Route::MovieDetail(id)))
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    html! {
        <div class="home-page">
            <h2>{"Now in the catalog"}</h2>
            { if *loading {
                html! { <div class="loading">{"Loading…"}</div> }
            } else if let Some(message) = &*error {
                html! { <div class="page-error">{message.clone()}</div> }
            } else if movies.is_empty() {
                html! { <div class="empty">{"No movies yet."}</div> }
            } else {
                html! {
                    <>
                        <div class="movie-grid">
                            { for movies.iter().map(|movie| html! {
                                <MovieCard movie={movie.clone()} on_select={on_select.clone()} />
                            }) }
                        </div>
                        <PaginationControls page={*page} total_pages={*total_pages} on_page={on_page} />
                    </>
                }
            } }
        </div>
    }
}
