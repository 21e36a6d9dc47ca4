use std::sync::Arc;

use anyhow::Context;
use axum::{Router, http::StatusCode, routing::post};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{catalog::Catalog, config::ServerConfig, http::api};
use ::api::message_path;

pub fn router(config: &ServerConfig, catalog: Arc<Catalog>) -> Router<()> {
    let router = Router::new()
        .route(&message_path("GetGenres"), post(api::get_genres))
        .route(&message_path("GetLanguages"), post(api::get_languages))
        .route(&message_path("GetCountries"), post(api::get_countries))
        .route(&message_path("SearchMovies"), post(api::search_movies))
        .with_state(catalog);

    // without a doc_root we are only an api server
    let router = match &config.doc_root {
        Some(doc_root) => router.fallback_service(ServeDir::new(doc_root)),
        None => router.fallback(fallback),
    };

    router.layer(TraceLayer::new_for_http())
}

pub async fn serve_http(config: Arc<ServerConfig>, catalog: Arc<Catalog>) -> anyhow::Result<()> {
    let router = router(&config, catalog);

    let listener = tokio::net::TcpListener::bind(config.socket)
        .await
        .with_context(|| format!("failed to bind {}", config.socket))?;

    info!("listening on {}", config.socket);

    axum::serve(listener, router)
        .await
        .context("http server exited")
}

async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::tests::SAMPLE;
    use ::api::{filter::GetGenresResp, search::SearchMoviesResp};

    fn test_router() -> Router<()> {
        let config = ServerConfig {
            socket: "127.0.0.1:0".parse().unwrap(),
            catalog: PathBuf::from("unused.toml"),
            doc_root: None,
        };

        router(&config, Arc::new(Catalog::parse(SAMPLE).unwrap()))
    }

    fn post_json(name: &str, body: &str) -> Request<Body> {
        Request::post(message_path(name))
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
        resp.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn genres_endpoint_lists_catalog_genres() {
        let resp = test_router()
            .oneshot(post_json("GetGenres", "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body: GetGenresResp = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.genres, vec!["Action", "Sci-Fi", "Comedy", "Romance"]);
    }

    #[tokio::test]
    async fn search_endpoint_filters_catalog() {
        let resp = test_router()
            .oneshot(post_json("SearchMovies", r#"{ "country": "France" }"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body: SearchMoviesResp = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].id, 2);
    }

    #[tokio::test]
    async fn unconstrained_search_is_rejected_with_message() {
        let resp = test_router()
            .oneshot(post_json("SearchMovies", "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_bytes(resp).await, b"search request has no constraints");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let resp = test_router()
            .oneshot(post_json("DeleteMovie", "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
