use api::{movie::Movie, search::SearchMoviesReq};
use tracing::{debug, error};

use crate::{
    display_error,
    filters::FilterOptions,
    selection::Selection,
    sequence::{RequestSequence, Ticket},
};

pub const FILTER_LOAD_FALLBACK: &str = "Failed to load filters";
pub const SEARCH_FALLBACK: &str = "Search failed";

// what the overlay should currently render
//
// error and results never coexist in OverlayState, so exactly one of these
// applies at a time
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayView<'a> {
    Closed,
    Idle,
    Searching,
    Results(&'a [Movie]),
    NoResults,
    Error(&'a str),
}

// OverlayState
//
// all of the state behind the search overlay.  the async operations are split
// into begin_*/finish_* pairs: begin_* updates the state and hands back the
// ticket (and request) to run, and finish_* applies the outcome only if that
// ticket is still the latest for its operation
#[derive(Clone, Debug, Default)]
pub struct OverlayState {
    is_open: bool,
    pub selection: Selection,
    options: FilterOptions,
    filters_loading: bool,
    searching: bool,
    // None until the first search completes
    results: Option<Vec<Movie>>,
    error: Option<String>,
    filter_seq: RequestSequence,
    search_seq: RequestSequence,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filters_loading(&self) -> bool {
        self.filters_loading
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn results(&self) -> Option<&[Movie]> {
        self.results.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // opening always refreshes the filter lists, so this returns the ticket
    // for that load
    pub fn open(&mut self) -> Ticket {
        self.is_open = true;
        self.begin_filter_load()
    }

    // closing throws away everything, including any requests still in flight
    pub fn close(&mut self) {
        let filter_seq = std::mem::take(&mut self.filter_seq);
        let search_seq = std::mem::take(&mut self.search_seq);

        *self = OverlayState {
            filter_seq,
            search_seq,
            ..Default::default()
        };

        self.filter_seq.invalidate();
        self.search_seq.invalidate();
    }

    pub fn begin_filter_load(&mut self) -> Ticket {
        self.filters_loading = true;
        self.filter_seq.begin()
    }

    // returns whether the outcome was applied
    pub fn finish_filter_load(
        &mut self,
        ticket: Ticket,
        outcome: anyhow::Result<FilterOptions>,
    ) -> bool {
        if !self.filter_seq.is_current(ticket) {
            debug!("discarding stale filter load {ticket:?}");
            return false;
        }

        self.filters_loading = false;

        match outcome {
            Ok(options) => {
                self.selection.retain_offered(&options);
                self.options = options;
            }
            Err(err) => {
                error!("failed to load filter options: {err}");
                self.set_error(display_error(&err, FILTER_LOAD_FALLBACK));
            }
        }

        true
    }

    // returns None, leaving the state untouched, when the overlay is closed
    // or there is nothing to search for
    pub fn begin_search(&mut self) -> Option<(Ticket, SearchMoviesReq)> {
        if !self.is_open {
            return None;
        }

        let req = self.selection.to_request()?;

        self.searching = true;
        self.error = None;

        Some((self.search_seq.begin(), req))
    }

    // returns whether the outcome was applied
    pub fn finish_search(&mut self, ticket: Ticket, outcome: anyhow::Result<Vec<Movie>>) -> bool {
        if !self.search_seq.is_current(ticket) {
            debug!("discarding stale search {ticket:?}");
            return false;
        }

        self.searching = false;

        match outcome {
            Ok(results) => {
                self.error = None;
                self.results = Some(results);
            }
            Err(err) => {
                error!("movie search failed: {err}");
                self.set_error(display_error(&err, SEARCH_FALLBACK));
            }
        }

        true
    }

    fn set_error(&mut self, message: String) {
        self.results = None;
        self.error = Some(message);
    }

    pub fn view(&self) -> OverlayView<'_> {
        if !self.is_open {
            return OverlayView::Closed;
        }

        if self.searching {
            return OverlayView::Searching;
        }

        if let Some(err) = &self.error {
            return OverlayView::Error(err);
        }

        match &self.results {
            Some(results) if results.is_empty() => OverlayView::NoResults,
            Some(results) => OverlayView::Results(results),
            None => OverlayView::Idle,
        }
    }
}
