use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Movie;
use crate::routes::Route;
use crate::services::search_movies;
use crate::utils::PAGE_SIZE;

use super::{MovieCard, PaginationControls};

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub navigate: Callback<Route>,
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let query_ref = use_node_ref();
    let submitted = use_state(String::new);
    let movies = use_state(Vec::<Movie>::new);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let movies = movies.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(((*submitted).clone(), *page), move |(query, page)| {
            let query = query.clone();
            let page = *page;
            if !query.is_empty() {
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match search_movies(&query, page, PAGE_SIZE).await {
                        Ok(response) => {
                            movies.set(response.movies);
                            total_pages.set(response.total_pages.unwrap_or(1));
                            error.set(None);
                            loading.set(false);
                        }
                        Err(e) => {
                            log::error!("❌ Search failed: {}", e);
                            error.set(Some(e));
                            loading.set(false);
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_submit = {
        let query_ref = query_ref.clone();
        let submitted = submitted.clone();
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = query_ref.cast::<HtmlInputElement>() {
                page.set(1);
                submitted.set(input.value().trim().to_string());
            }
        })
    };

    let on_select = {
        let navigate = props.navigate.clone();
        Callback::from(move |id: String| navigate.emit(Route::MovieDetail(id)))
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let results = if *loading {
        html! { <div class="loading">{"Searching…"}</div> }
    } else if let Some(message) = &*error {
        html! { <div class="page-error">{message.clone()}</div> }
    } else if submitted.is_empty() {
        html! { <div class="empty">{"Type a title (e.g. \"Godfather\") and press Enter to search."}</div> }
    } else if movies.is_empty() {
        html! { <div class="empty">{format!("No results for \"{}\"", *submitted)}</div> }
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
    };

    html! {
        <div class="search-page">
            <form class="search-form" onsubmit={on_submit}>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search movies…"
                    ref={query_ref}
                />
                <button type="submit" class="btn btn-primary">{"Search"}</button>
            </form>
            {results}
        </div>
    }
}
