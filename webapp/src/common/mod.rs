pub mod style;

use chrono::{Datelike, NaiveDate};

// the backend sends release dates as yyyy-mm-dd strings; anything else is
// shown as-is
pub fn release_year(release_date: &str) -> String {
    match NaiveDate::parse_from_str(release_date, "%Y-%m-%d") {
        Ok(date) => date.year().to_string(),
        Err(_) => release_date.to_owned(),
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

// "Action, Drama", or a dash for an empty list
pub fn join_or_dash(values: &[String]) -> String {
    match values.is_empty() {
        true => String::from("—"),
        false => values.join(", "),
    }
}
