use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::{debug, instrument};

use crate::{catalog::Catalog, http::AppError};
use api::{filter::*, search::*};

// http api endpoints
//
// one handler per api message.  the catalog is immutable once loaded, so the
// handlers share it through an Arc without any locking

#[instrument(skip_all)]
pub(super) async fn get_genres(
    State(catalog): State<Arc<Catalog>>,
    Json(_message): Json<GetGenresReq>,
) -> Json<GetGenresResp> {
    Json(GetGenresResp {
        genres: catalog.genres(),
    })
}

#[instrument(skip_all)]
pub(super) async fn get_languages(
    State(catalog): State<Arc<Catalog>>,
    Json(_message): Json<GetLanguagesReq>,
) -> Json<GetLanguagesResp> {
    Json(GetLanguagesResp {
        languages: catalog.languages(),
    })
}

#[instrument(skip_all)]
pub(super) async fn get_countries(
    State(catalog): State<Arc<Catalog>>,
    Json(_message): Json<GetCountriesReq>,
) -> Json<GetCountriesResp> {
    Json(GetCountriesResp {
        countries: catalog.countries(),
    })
}

// the webapp never sends a request without constraints, but anything else
// talking to us could, and answering it would dump the whole catalog
#[instrument(skip_all)]
pub(super) async fn search_movies(
    State(catalog): State<Arc<Catalog>>,
    Json(message): Json<SearchMoviesReq>,
) -> Result<Json<SearchMoviesResp>, AppError> {
    if message == SearchMoviesReq::default() {
        return Err(AppError::bad_request("search request has no constraints"));
    }

    let results = catalog.search(&message);

    debug!("search matched {} movies", results.len());

    Ok(Json(SearchMoviesResp { results }))
}
