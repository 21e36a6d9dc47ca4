pub mod filters;
pub mod modal;
pub mod overlay;
pub mod results;
pub mod search;
