use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::MovieInput;
use crate::routes::Route;
use crate::services::{create_movie, fetch_movie, update_movie};

use super::use_snackbar;

#[derive(Properties, PartialEq)]
pub struct MovieFormProps {
    /// None = create, Some = edit.
    pub id: Option<String>,
    pub navigate: Callback<Route>,
}

#[derive(Clone, PartialEq, Default)]
struct FormFields {
    title: String,
    description: String,
    year: String,
    duration: String,
    rating: String,
    genres: String,
    poster_url: String,
    trailer_url: String,
    release_date: String,
}

#[function_component(MovieForm)]
pub fn movie_form(props: &MovieFormProps) -> Html {
    let snackbar = use_snackbar();
    let fields = use_state(FormFields::default);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Edit mode: prefill from the backend.
    {
        let fields = fields.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_movie(&id).await {
                        Ok(movie) => fields.set(FormFields {
                            title: movie.title,
                            description: movie.description,
                            year: movie.year.map(|y| y.to_string()).unwrap_or_default(),
                            duration: movie.duration.map(|d| d.to_string()).unwrap_or_default(),
                            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
                            genres: movie.genres.join(", "),
                            poster_url: movie.poster_url.unwrap_or_default(),
                            trailer_url: movie.trailer_url.unwrap_or_default(),
                            release_date: movie.release_date.unwrap_or_default(),
                        }),
                        Err(e) => {
                            log::error!("❌ Error loading movie for edit: {}", e);
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

    let on_description = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*fields).clone();
                next.description = input.value();
                fields.set(next);
            }
        })
    };

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

            if current.title.trim().is_empty() || current.description.trim().is_empty() {
                error.set(Some("Title and description are required".to_string()));
                return;
            }

            let input = MovieInput {
                title: current.title.trim().to_string(),
                description: current.description.trim().to_string(),
                year: current.year.trim().parse().ok(),
                duration: current.duration.trim().parse().ok(),
                rating: current.rating.trim().parse().ok(),
                genres: current
                    .genres
                    .split(',')
                    .map(|genre| genre.trim().to_string())
                    .filter(|genre| !genre.is_empty())
                    .collect(),
                poster_url: non_empty(&current.poster_url),
                trailer_url: non_empty(&current.trailer_url),
                release_date: non_empty(&current.release_date),
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
                    Some(id) => update_movie(id, &input).await,
                    None => create_movie(&input).await,
                };
                saving.set(false);
                match result {
                    Ok(response) => {
                        // Writes are queued server-side; relay the ack.
                        snackbar.success(
                            response
                                .message
                                .unwrap_or_else(|| "Movie saved".to_string()),
                        );
                        navigate.emit(Route::AdminMovies);
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
        Callback::from(move |_| navigate.emit(Route::AdminMovies))
    };

    let heading = if props.id.is_some() { "Edit movie" } else { "Add movie" };

    html! {
        <div class="form-page">
            <h2>{heading}</h2>
            <form class="entity-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input id="title" type="text" value={fields.title.clone()}
                        oninput={set_field(|f, v| f.title = v)} />
                </div>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea id="description" rows="4" value={fields.description.clone()}
                        oninput={on_description} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="year">{"Year"}</label>
                        <input id="year" type="number" value={fields.year.clone()}
                            oninput={set_field(|f, v| f.year = v)} />
                    </div>
                    <div class="form-group">
                        <label for="duration">{"Duration (min)"}</label>
                        <input id="duration" type="number" value={fields.duration.clone()}
                            oninput={set_field(|f, v| f.duration = v)} />
                    </div>
                    <div class="form-group">
                        <label for="rating">{"Rating"}</label>
                        <input id="rating" type="number" step="0.1" value={fields.rating.clone()}
                            oninput={set_field(|f, v| f.rating = v)} />
                    </div>
                </div>
                <div class="form-group">
                    <label for="genres">{"Genres (comma separated)"}</label>
                    <input id="genres" type="text" value={fields.genres.clone()}
                        oninput={set_field(|f, v| f.genres = v)} />
                </div>
                <div class="form-group">
                    <label for="poster">{"Poster URL"}</label>
                    <input id="poster" type="url" value={fields.poster_url.clone()}
                        oninput={set_field(|f, v| f.poster_url = v)} />
                </div>
                <div class="form-group">
                    <label for="trailer">{"Trailer URL"}</label>
                    <input id="trailer" type="url" value={fields.trailer_url.clone()}
                        oninput={set_field(|f, v| f.trailer_url = v)} />
                </div>
                <div class="form-group">
                    <label for="release">{"Release date"}</label>
                    <input id="release" type="date" value={fields.release_date.clone()}
                        oninput={set_field(|f, v| f.release_date = v)} />
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

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
