use std::{collections::HashSet, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, info, instrument};

use api::{movie::Movie, search::SearchMoviesReq};

// in-memory movie catalog
//
// loaded once at startup from a toml file of [[movies]] tables.  matching is
// plain filtering in catalog order; there is no ranking
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl Catalog {
    pub fn parse(doc: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = toml::from_str(doc).context("failed to parse catalog")?;

        let mut seen = HashSet::new();
        for movie in catalog.movies.iter() {
            if !seen.insert(movie.id) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate movie id {} in catalog",
                    movie.id
                )));
            }
        }

        Ok(catalog)
    }

    #[instrument(level=Level::DEBUG)]
    pub async fn load(filename: &Path) -> anyhow::Result<Self> {
        let doc = tokio::fs::read_to_string(filename)
            .await
            .with_context(|| format!("failed to read catalog {}", filename.display()))?;

        let catalog = Catalog::parse(&doc)?;

        info!("loaded {} movies", catalog.movies.len());
        Ok(catalog)
    }

    pub fn genres(&self) -> Vec<String> {
        distinct(self.movies.iter().flat_map(|m| m.genres.iter()))
    }

    pub fn languages(&self) -> Vec<String> {
        distinct(self.movies.iter().flat_map(|m| m.language.iter()))
    }

    pub fn countries(&self) -> Vec<String> {
        distinct(self.movies.iter().flat_map(|m| m.country.iter()))
    }

    // every supplied constraint must hold; missing ones match everything
    pub fn search(&self, req: &SearchMoviesReq) -> Vec<Movie> {
        let query = req.query.as_ref().map(|q| q.to_lowercase());

        self.movies
            .iter()
            .filter(|m| match &query {
                Some(q) => m.title.to_lowercase().contains(q),
                None => true,
            })
            .filter(|m| match &req.genres {
                Some(genres) => genres.iter().all(|g| contains_folded(&m.genres, g)),
                None => true,
            })
            .filter(|m| match &req.language {
                Some(language) => contains_folded(&m.language, language),
                None => true,
            })
            .filter(|m| match &req.country {
                Some(country) => contains_folded(&m.country, country),
                None => true,
            })
            .cloned()
            .collect()
    }
}

// first occurrence wins, so the lists come back in catalog order
fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();

    values
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

fn contains_folded(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v.to_lowercase() == needle.to_lowercase())
}
