use dioxus::prelude::*;

use api::movie::Movie;

use crate::common::{format_rating, join_or_dash, release_year};

#[derive(Clone, PartialEq, Props)]
pub struct ResultListProps {
    movies: Vec<Movie>,
}

// movies are keyed by their backend id; titles are not unique
#[component]
pub fn ResultList(props: ResultListProps) -> Element {
    rsx! {
        div { class: "result-list",
            for movie in props.movies.into_iter() {
                MovieCard { key: "{movie.id}", movie }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MovieCardProps {
    movie: Movie,
}

#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let movie = props.movie;

    let rating = format_rating(movie.rating);
    let year = release_year(&movie.release_date);
    let genres = join_or_dash(&movie.genres);
    let languages = join_or_dash(&movie.language);
    let countries = join_or_dash(&movie.country);

    rsx! {
        div { class: "movie-card",
            div { class: "movie-card-header",
                span { class: "movie-title", "{movie.title} ({year})" }
                span { class: "movie-rating", "★ {rating}" }
            }
            div { class: "movie-details",
                span { "Genres" }
                span { "{genres}" }
                span { "Language" }
                span { "{languages}" }
                span { "Country" }
                span { "{countries}" }
            }
        }
    }
}
