use serde::{Deserialize, Serialize};

// structs and types

// opaque identifier assigned by the backend
//
// titles are not unique (remakes, re-releases), so the webapp keys result
// lists on this instead
pub type MovieId = u64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub rating: f64,
    pub genres: Vec<String>,
    // the backend names these in the singular even though they are lists
    pub language: Vec<String>,
    pub country: Vec<String>,
    pub release_date: String,
}
