use std::collections::BTreeSet;

use dioxus::prelude::*;

// GenreChips
//
// one toggle chip per genre, highlighted when selected
#[derive(Clone, PartialEq, Props)]
pub struct GenreChipsProps {
    genres: Vec<String>,
    selected: BTreeSet<String>,
    on_toggle: EventHandler<String>,
}

#[component]
pub fn GenreChips(props: GenreChipsProps) -> Element {
    let on_toggle = props.on_toggle;

    rsx! {
        div { class: "filter-genres",
            span { class: "form-label", "Genres" }
            div { class: "chip-list",
                for genre in props.genres.into_iter() {
                    button {
                        key: "{genre}",
                        class: chip_class(props.selected.contains(&genre)),
                        aria_pressed: props.selected.contains(&genre),
                        onclick: {
                            let genre = genre.clone();
                            move |_| on_toggle.call(genre.clone())
                        },
                        "{genre}"
                    }
                }
            }
        }
    }
}

fn chip_class(selected: bool) -> &'static str {
    match selected {
        true => "chip selected",
        false => "chip",
    }
}

// OptionSelect
//
// single-choice dropdown whose first entry means "no constraint"; choosing it
// reports an empty string
#[derive(Clone, PartialEq, Props)]
pub struct OptionSelectProps {
    label: &'static str,
    any_label: &'static str,
    options: Vec<String>,
    #[props(!optional)]
    selected: Option<String>,
    on_change: EventHandler<String>,
}

#[component]
pub fn OptionSelect(props: OptionSelectProps) -> Element {
    let on_change = props.on_change;
    let selected = props.selected.unwrap_or_default();

    rsx! {
        label {
            span { class: "form-label", "{props.label}" }
            select {
                class: "form-select",
                value: "{selected}",
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", selected: selected.is_empty(), "{props.any_label}" }
                for value in props.options.into_iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
