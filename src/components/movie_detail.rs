use yew::prelude::*;

use crate::models::Movie;
use crate::services::fetch_movie;
use crate::utils::format_duration;

#[derive(Properties, PartialEq)]
pub struct MovieDetailProps {
    pub id: String,
}

#[function_component(MovieDetail)]
pub fn movie_detail(props: &MovieDetailProps) -> Html {
    let movie = use_state(|| None::<Movie>);
    let error = use_state(|| None::<String>);

    {
        let movie = movie.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_movie(&id).await {
                    Ok(found) => movie.set(Some(found)),
                    Err(e) => {
                        log::error!("❌ Error loading movie {}: {}", id, e);
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    if let Some(message) = &*error {
        return html! { <div class="page-error">{message.clone()}</div> };
    }

    let Some(movie) = &*movie else {
        return html! { <div class="loading">{"Loading…"}</div> };
    };

    let poster = match &movie.poster_url {
        Some(url) => html! { <img class="detail-poster" src={url.clone()} alt={movie.title.clone()} /> },
        None => html! {},
    };

    html! {
        <div class="movie-detail">
            {poster}
            <div class="detail-body">
                <h2>{&movie.title}</h2>
                <div class="detail-meta">
                    { movie.year.map(|year| html! { <span>{year}</span> }).unwrap_or_default() }
                    { movie.duration.map(|duration| html! { <span>{format_duration(duration)}</span> }).unwrap_or_default() }
                    { movie.rating.map(|rating| html! { <span>{format!("★ {:.1}", rating)}</span> }).unwrap_or_default() }
                </div>
                { if movie.genres.is_empty() {
                    html! {}
                } else {
                    html! { <div class="detail-genres">{movie.genres.join(" · ")}</div> }
                } }
                <p class="detail-description">{&movie.description}</p>

                { if movie.cast.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Cast"}</h3>
                            <ul class="detail-cast">
                                { for movie.cast.iter().map(|member| html! {
                                    <li>
                                        {&member.name}
                                        { member.character_name.as_ref()
                                            .map(|character| html! { <span class="muted">{format!(" as {}", character)}</span> })
                                            .unwrap_or_default() }
                                    </li>
                                }) }
                            </ul>
                        </>
                    }
                } }

                { if movie.crew.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Crew"}</h3>
                            <ul class="detail-crew">
                                { for movie.crew.iter().map(|member| html! {
                                    <li>
                                        {&member.name}
                                        { member.role.as_ref()
                                            .map(|role| html! { <span class="muted">{format!(" ({})", role)}</span> })
                                            .unwrap_or_default() }
                                    </li>
                                }) }
                            </ul>
                        </>
                    }
                } }

                { movie.trailer_url.as_ref().map(|url| html! {
                    <a class="btn" href={url.clone()} target="_blank">{"Watch trailer"}</a>
                }).unwrap_or_default() }
            </div>
        </div>
    }
}
