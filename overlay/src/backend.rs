use async_trait::async_trait;
use futures::try_join;

use api::{movie::Movie, search::SearchMoviesReq};

use crate::filters::FilterOptions;

// the remote catalog as seen by the overlay
//
// the webapp implements this over the http api; tests substitute an in-memory
// fake.  futures in the browser are not Send, hence ?Send
#[async_trait(?Send)]
pub trait MovieBackend {
    async fn genres(&self) -> anyhow::Result<Vec<String>>;

    async fn languages(&self) -> anyhow::Result<Vec<String>>;

    async fn countries(&self) -> anyhow::Result<Vec<String>>;

    async fn search_movies(&self, req: &SearchMoviesReq) -> anyhow::Result<Vec<Movie>>;
}

// fetch all three option lists concurrently
//
// this is all-or-nothing: the first failure fails the whole batch and the
// lists that did arrive are thrown away
pub async fn load_filter_options<B>(backend: &B) -> anyhow::Result<FilterOptions>
where
    B: MovieBackend + ?Sized,
{
    let (genres, languages, countries) =
        try_join!(backend.genres(), backend.languages(), backend.countries())?;

    FilterOptions::from_unsorted(genres, languages, countries)
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;

    use super::*;

    // canned responses plus a log of every search request received
    #[derive(Default)]
    pub struct FakeBackend {
        pub genres: Vec<String>,
        pub languages: Vec<String>,
        pub countries: Vec<String>,
        pub results: Vec<Movie>,
        pub fail_countries: Option<String>,
        pub fail_search: Option<String>,
        pub searches: RefCell<Vec<SearchMoviesReq>>,
    }

    #[async_trait(?Send)]
    impl MovieBackend for FakeBackend {
        async fn genres(&self) -> anyhow::Result<Vec<String>> {
            Ok(self.genres.clone())
        }

        async fn languages(&self) -> anyhow::Result<Vec<String>> {
            Ok(self.languages.clone())
        }

        async fn countries(&self) -> anyhow::Result<Vec<String>> {
            match &self.fail_countries {
                Some(msg) => Err(anyhow::Error::msg(msg.clone())),
                None => Ok(self.countries.clone()),
            }
        }

        async fn search_movies(&self, req: &SearchMoviesReq) -> anyhow::Result<Vec<Movie>> {
            self.searches.borrow_mut().push(req.clone());

            match &self.fail_search {
                Some(msg) => Err(anyhow::Error::msg(msg.clone())),
                None => Ok(self.results.clone()),
            }
        }
    }

    pub fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_owned(),
            rating: 7.5,
            genres: vec!["Drama".to_owned()],
            language: vec!["English".to_owned()],
            country: vec!["United States".to_owned()],
            release_date: "2001-01-01".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::fake::FakeBackend;
    use super::*;

    #[test]
    fn loads_and_sorts_every_list() {
        let backend = FakeBackend {
            genres: vec!["Drama".to_owned(), "action".to_owned()],
            languages: vec!["Spanish".to_owned(), "english".to_owned()],
            countries: vec!["Mexico".to_owned()],
            ..Default::default()
        };

        let options = block_on(load_filter_options(&backend)).unwrap();

        assert_eq!(options.genres, vec!["action".to_owned(), "Drama".to_owned()]);
        assert_eq!(options.languages, vec!["english".to_owned(), "Spanish".to_owned()]);
        assert_eq!(options.countries, vec!["Mexico".to_owned()]);
    }

    #[test]
    fn one_failing_list_fails_the_batch() {
        let backend = FakeBackend {
            genres: vec!["Drama".to_owned()],
            fail_countries: Some("countries unavailable".to_owned()),
            ..Default::default()
        };

        let err = block_on(load_filter_options(&backend)).unwrap_err();

        assert_eq!(err.to_string(), "countries unavailable");
    }
}
