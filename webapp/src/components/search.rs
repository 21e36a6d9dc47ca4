use dioxus::prelude::*;

// SearchBar
//
// free-text input plus a search button.  typing only updates the query; a
// search runs on the button or on enter, never on input
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    query: String,
    placeholder: &'static str,
    searching: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let on_input = props.on_input;
    let on_submit = props.on_submit;

    rsx! {
        div { class: "search-bar",
            input {
                class: "form-input",
                r#type: "text",
                autofocus: true,
                placeholder: "{props.placeholder}",
                value: "{props.query}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                },
            }
            button {
                class: "btn btn-primary",
                disabled: props.searching,
                onclick: move |_| on_submit.call(()),
                if props.searching {
                    "Searching..."
                } else {
                    "Search"
                }
            }
        }
    }
}
