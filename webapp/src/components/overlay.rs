use dioxus::prelude::*;
use tracing::debug;

use overlay::{
    backend::{MovieBackend, load_filter_options},
    state::{OverlayState, OverlayView},
};

use crate::{
    backend::HttpBackend,
    components::{
        filters::{GenreChips, OptionSelect},
        modal::Overlay,
        results::ResultList,
        search::SearchBar,
    },
};

// MovieSearchOverlay
//
// the movie search overlay.  opening it reloads the filter lists; closing it
// resets everything (see OverlayState::close), so each open starts from a
// blank query and no filters
#[derive(Clone, PartialEq, Props)]
pub struct MovieSearchOverlayProps {
    is_open: ReadOnlySignal<bool>,
    on_close: EventHandler,
}

#[component]
pub fn MovieSearchOverlay(props: MovieSearchOverlayProps) -> Element {
    let is_open = props.is_open;
    let on_close = props.on_close;

    let mut state = use_signal(OverlayState::default);

    // follow the open flag; this only reads is_open, so writing the state
    // here does not retrigger it
    use_effect(move || {
        if is_open() {
            let ticket = state.write().open();
            debug!("overlay opened, loading filters");

            spawn(async move {
                let outcome = load_filter_options(&HttpBackend).await;
                state.write().finish_filter_load(ticket, outcome);
            });
        } else if state.peek().is_open() {
            debug!("overlay closed, resetting");
            state.write().close();
        }
    });

    let mut run_search = move || {
        let next = state.write().begin_search();

        let Some((ticket, req)) = next else {
            return;
        };

        spawn(async move {
            let outcome = HttpBackend.search_movies(&req).await;
            state.write().finish_search(ticket, outcome);
        });
    };

    if !is_open() {
        return rsx! {};
    }

    let current = state.read();
    let options = current.options().clone();
    let selection = current.selection.clone();
    let filters_loading = current.filters_loading();
    let searching = current.is_searching();

    let body = match current.view() {
        OverlayView::Closed => rsx! {},
        OverlayView::Idle => rsx! {
            p { class: "result-status", "Enter a title or pick some filters, then search." }
        },
        OverlayView::Searching => rsx! {
            p { class: "result-status", "Searching..." }
        },
        OverlayView::NoResults => rsx! {
            p { class: "result-status", "No movies matched your search." }
        },
        OverlayView::Error(message) => rsx! {
            p { class: "result-error", role: "alert", "{message}" }
        },
        OverlayView::Results(movies) => {
            let movies = movies.to_vec();
            rsx! {
                p { class: "result-status", "Found {movies.len()} movies" }
                ResultList { movies }
            }
        }
    };

    drop(current);

    rsx! {
        Overlay { title: "Search movies", on_close,
            SearchBar {
                query: selection.query.clone(),
                placeholder: "Search by title...",
                searching,
                on_input: move |query: String| state.write().selection.query = query,
                on_submit: move |_: ()| run_search(),
            }

            if filters_loading && options.is_empty() {
                p { class: "filter-hint", "Loading filters..." }
            } else {
                div { class: "filter-panel",
                    GenreChips {
                        genres: options.genres,
                        selected: selection.genres,
                        on_toggle: move |genre: String| state.write().selection.toggle_genre(&genre),
                    }
                    OptionSelect {
                        label: "Language",
                        any_label: "Any language",
                        options: options.languages,
                        selected: selection.language,
                        on_change: move |language: String| state.write().selection.set_language(language),
                    }
                    OptionSelect {
                        label: "Country",
                        any_label: "Any country",
                        options: options.countries,
                        selected: selection.country,
                        on_change: move |country: String| state.write().selection.set_country(country),
                    }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.write().selection.clear_filters(),
                    "Clear filters"
                }
            }

            {body}
        }
    }
}
