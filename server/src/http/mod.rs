use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub mod api;
pub mod svc;

// adapted from https://github.com/tokio-rs/axum/blob/main/examples/anyhow-error-response/src/main.rs
//
// the catalog is in memory, so the only failures a handler can report are
// requests we refuse to answer.  the body is just the message text, which the
// webapp shows to the user as-is
pub(crate) struct AppError {
    status: StatusCode,
    err: anyhow::Error,
}

impl AppError {
    pub(crate) fn bad_request(msg: &str) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            err: anyhow::Error::msg(msg.to_owned()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.err.to_string()).into_response()
    }
}
