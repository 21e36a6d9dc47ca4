// framework-free state for the movie search overlay
//
// everything here is plain data plus the sequencing rules for the two async
// operations the overlay performs, so that the dioxus components in the webapp
// only have to wire signals to these methods and render the derived view

pub mod backend;
pub mod filters;
pub mod state;
pub mod selection;
pub mod sequence;

// display text for a failed operation
//
// the message of the failure is shown verbatim when it has one; network
// errors, server errors and malformed responses all end up here, and we make
// no attempt to tell them apart
pub fn display_error(err: &anyhow::Error, fallback: &str) -> String {
    let message = err.to_string();
    let message = message.trim();

    if message.is_empty() {
        fallback.to_owned()
    } else {
        message.to_owned()
    }
}
