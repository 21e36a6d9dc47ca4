use async_trait::async_trait;

use api::{filter::*, movie::Movie, search::*};
use overlay::backend::MovieBackend;

// the overlay's view of the catalog, over the http api
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl MovieBackend for HttpBackend {
    async fn genres(&self) -> anyhow::Result<Vec<String>> {
        Ok(get_genres(&GetGenresReq {}).await?.genres)
    }

    async fn languages(&self) -> anyhow::Result<Vec<String>> {
        Ok(get_languages(&GetLanguagesReq {}).await?.languages)
    }

    async fn countries(&self) -> anyhow::Result<Vec<String>> {
        Ok(get_countries(&GetCountriesReq {}).await?.countries)
    }

    async fn search_movies(&self, req: &SearchMoviesReq) -> anyhow::Result<Vec<Movie>> {
        Ok(search_movies(req).await?.results)
    }
}
