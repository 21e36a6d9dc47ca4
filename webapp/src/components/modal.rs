use dioxus::prelude::*;

// Overlay
//
// full-screen modal surface.  clicking the backdrop, the close button or
// pressing escape all report through on_close; whether the overlay actually
// goes away is up to the owner of the open flag
#[derive(Clone, PartialEq, Props)]
pub struct OverlayProps {
    title: String,
    on_close: EventHandler,
    children: Element,
}

#[component]
pub fn Overlay(props: OverlayProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-content",
                role: "dialog",
                // clicks inside the content must not reach the backdrop
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}
