use std::collections::BTreeSet;

use api::search::SearchMoviesReq;

use crate::filters::FilterOptions;

// the user's current choices in the overlay
//
// genres are a multi-select set, language and country are single selects where
// None means "any"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub query: String,
    pub genres: BTreeSet<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

impl Selection {
    // add the genre if it is not selected, remove it if it is
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.genres.remove(genre) {
            self.genres.insert(genre.to_owned());
        }
    }

    pub fn is_genre_selected(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    // the select element reports "" for its placeholder option
    pub fn set_language(&mut self, language: String) {
        self.language = non_empty(language);
    }

    pub fn set_country(&mut self, country: String) {
        self.country = non_empty(country);
    }

    pub fn has_filters(&self) -> bool {
        !self.genres.is_empty() || self.language.is_some() || self.country.is_some()
    }

    pub fn clear_filters(&mut self) {
        self.genres.clear();
        self.language = None;
        self.country = None;
    }

    // drop any choice that is no longer offered by the freshly loaded options
    pub fn retain_offered(&mut self, options: &FilterOptions) {
        self.genres.retain(|g| options.genres.contains(g));

        if let Some(language) = &self.language {
            if !options.languages.contains(language) {
                self.language = None;
            }
        }

        if let Some(country) = &self.country {
            if !options.countries.contains(country) {
                self.country = None;
            }
        }
    }

    // build the search request, or None if there is nothing to search for
    //
    // unset constraints become None rather than empty values, so they are left
    // out of the request entirely
    pub fn to_request(&self) -> Option<SearchMoviesReq> {
        let query = non_empty(self.query.trim().to_owned());

        if query.is_none() && !self.has_filters() {
            return None;
        }

        let genres = match self.genres.is_empty() {
            true => None,
            false => Some(self.genres.iter().cloned().collect()),
        };

        Some(SearchMoviesReq {
            query,
            genres,
            language: self.language.clone(),
            country: self.country.clone(),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    match value.is_empty() {
        true => None,
        false => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_set() {
        let mut selection = Selection::default();
        selection.toggle_genre("Drama");

        let before = selection.genres.clone();

        selection.toggle_genre("Action");
        selection.toggle_genre("Action");

        assert_eq!(selection.genres, before);
    }

    #[test]
    fn toggle_action_twice_leaves_nothing_selected() {
        let mut selection = Selection::default();

        selection.toggle_genre("Action");
        assert!(selection.is_genre_selected("Action"));

        selection.toggle_genre("Action");
        assert!(selection.genres.is_empty());
    }

    #[test]
    fn empty_select_value_clears_choice() {
        let mut selection = Selection::default();

        selection.set_language("French".to_owned());
        assert_eq!(selection.language.as_deref(), Some("French"));

        selection.set_language(String::new());
        assert_eq!(selection.language, None);
    }

    #[test]
    fn nothing_to_search_for() {
        let selection = Selection {
            query: "   ".to_owned(),
            ..Default::default()
        };

        assert_eq!(selection.to_request(), None);
    }

    #[test]
    fn query_only_request_omits_filters() {
        let selection = Selection {
            query: "Matrix".to_owned(),
            ..Default::default()
        };

        assert_eq!(
            selection.to_request(),
            Some(SearchMoviesReq {
                query: Some("Matrix".to_owned()),
                genres: None,
                language: None,
                country: None,
            })
        );
    }

    #[test]
    fn single_filter_request_omits_everything_else() {
        let mut selection = Selection::default();
        selection.set_country("Japan".to_owned());

        assert_eq!(
            selection.to_request(),
            Some(SearchMoviesReq {
                query: None,
                genres: None,
                language: None,
                country: Some("Japan".to_owned()),
            })
        );

        let mut selection = Selection::default();
        selection.toggle_genre("Horror");
        selection.toggle_genre("Comedy");

        let req = selection.to_request().unwrap();
        assert_eq!(req.genres, Some(vec!["Comedy".to_owned(), "Horror".to_owned()]));
        assert_eq!(req.query, None);
    }

    #[test]
    fn language_only_request_omits_everything_else() {
        let mut selection = Selection::default();
        selection.set_language("French".to_owned());

        assert_eq!(
            selection.to_request(),
            Some(SearchMoviesReq {
                query: None,
                genres: None,
                language: Some("French".to_owned()),
                country: None,
            })
        );
    }

    #[test]
    fn retain_offered_drops_stale_choices() {
        let mut selection = Selection::default();
        selection.toggle_genre("Action");
        selection.toggle_genre("Noir");
        selection.set_language("Klingon".to_owned());
        selection.set_country("France".to_owned());

        let options = FilterOptions {
            genres: vec!["Action".to_owned()],
            languages: vec!["English".to_owned()],
            countries: vec!["France".to_owned()],
        };

        selection.retain_offered(&options);

        assert_eq!(selection.genres.len(), 1);
        assert!(selection.is_genre_selected("Action"));
        assert_eq!(selection.language, None);
        assert_eq!(selection.country.as_deref(), Some("France"));
    }

    #[test]
    fn clear_filters_keeps_query() {
        let mut selection = Selection {
            query: "alien".to_owned(),
            ..Default::default()
        };
        selection.toggle_genre("Horror");
        selection.set_language("English".to_owned());

        selection.clear_filters();

        assert!(!selection.has_filters());
        assert_eq!(selection.query, "alien");
    }
}
