use serde::{Deserialize, Serialize};

use crate::message;
use crate::movie::Movie;

// search the catalog
//
// every constraint is optional and is left out of the json entirely when
// unset; the backend treats a missing field as "no constraint", whereas an
// empty string would be a constraint that matches nothing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMoviesReq {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchMoviesResp {
    pub results: Vec<Movie>,
}

message! {SearchMovies}
