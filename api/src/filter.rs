use serde::{Deserialize, Serialize};

use crate::message;

// messages
//
// the three lookup lists that populate the overlay's filter panel; none of
// them take arguments, but they still post an (empty) json body so that every
// endpoint has the same shape

// list every genre known to the backend
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetGenresReq {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetGenresResp {
    pub genres: Vec<String>,
}

message! {GetGenres}

// list every spoken language
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetLanguagesReq {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetLanguagesResp {
    pub languages: Vec<String>,
}

message! {GetLanguages}

// list every production country
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetCountriesReq {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetCountriesResp {
    pub countries: Vec<String>,
}

message! {GetCountries}
