use yew::prelude::*;

use crate::models::Movie;
use crate::utils::format_duration;

#[derive(Properties, PartialEq)]
pub struct MovieCardProps {
    pub movie: Movie,
    pub on_select: Callback<String>,
}

#[function_component(MovieCard)]
pub fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;

    let onclick = {
        let on_select = props.on_select.clone();
        let id = movie.id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };

    let poster = match &movie.poster_url {
        Some(url) => html! { <img class="movie-poster" src={url.clone()} alt={movie.title.clone()} /> },
        None => html! { <div class="movie-poster movie-poster-placeholder">{"🎬"}</div> },
    };

    html! {
        <div class="movie-card" {onclick}>
            {poster}
            <div class="movie-card-body">
                <h3 class="movie-title">{&movie.title}</h3>
                <div class="movie-meta">
                    { movie.year.map(|year| html! { <span>{year}</span> }).unwrap_or_default() }
                    { movie.duration.map(|duration| html! { <span>{format_duration(duration)}</span> }).unwrap_or_default() }
                    { movie.rating.map(|rating| html! { <span>{format!("★ {:.1}", rating)}</span> }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}
