use icu_collator::{Collator, CollatorOptions, Strength};

// filter option lists
//
// the backend returns these in no particular order; the overlay always shows
// them in locale order without regard to case
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub genres: Vec<String>,
    pub languages: Vec<String>,
    pub countries: Vec<String>,
}

impl FilterOptions {
    pub fn from_unsorted(
        genres: Vec<String>,
        languages: Vec<String>,
        countries: Vec<String>,
    ) -> anyhow::Result<Self> {
        let collator = case_insensitive_collator()?;

        Ok(FilterOptions {
            genres: sort_case_insensitive(&collator, genres),
            languages: sort_case_insensitive(&collator, languages),
            countries: sort_case_insensitive(&collator, countries),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.languages.is_empty() && self.countries.is_empty()
    }
}

// root-locale collation at secondary strength: accents still count ("Éire"
// sorts next to "Egypt" but not equal to "Eire"), case does not
pub fn case_insensitive_collator() -> anyhow::Result<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);

    Collator::try_new(&Default::default(), options)
        .map_err(|err| anyhow::Error::msg(format!("failed to load collator: {err}")))
}

// slice::sort_by is stable, so entries that only differ in case keep the
// order the backend sent them in
pub fn sort_case_insensitive(collator: &Collator, mut items: Vec<String>) -> Vec<String> {
    items.sort_by(|a, b| collator.compare(a, b));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(items: &[&str]) -> Vec<String> {
        let collator = case_insensitive_collator().unwrap();
        sort_case_insensitive(&collator, strings(items))
    }

    #[test]
    fn lowercase_sorts_before_uppercase_neighbour() {
        assert_eq!(sorted(&["Drama", "action"]), strings(&["action", "Drama"]));
    }

    #[test]
    fn sort_is_stable_for_case_folded_ties() {
        assert_eq!(
            sorted(&["drama", "Comedy", "DRAMA", "Drama"]),
            strings(&["Comedy", "drama", "DRAMA", "Drama"])
        );

        assert_eq!(sorted(&["Drama", "drama"]), strings(&["Drama", "drama"]));
    }

    #[test]
    fn accented_entries_sort_with_their_base_letter() {
        assert_eq!(
            sorted(&["Zambia", "Éire", "Egypt"]),
            strings(&["Egypt", "Éire", "Zambia"])
        );

        assert_eq!(
            sorted(&["Zimbabwe", "Österreich", "Côte d'Ivoire", "Canada", "Norway"]),
            strings(&["Canada", "Côte d'Ivoire", "Norway", "Österreich", "Zimbabwe"])
        );
    }

    #[test]
    fn from_unsorted_sorts_every_list() {
        let options = FilterOptions::from_unsorted(
            strings(&["Western", "action"]),
            strings(&["english", "French"]),
            strings(&["United States", "france", "Brazil"]),
        )
        .unwrap();

        assert_eq!(options.genres, strings(&["action", "Western"]));
        assert_eq!(options.languages, strings(&["english", "French"]));
        assert_eq!(options.countries, strings(&["Brazil", "france", "United States"]));
    }

    #[test]
    fn empty_lists_are_empty() {
        assert!(FilterOptions::default().is_empty());
        assert!(FilterOptions::from_unsorted(vec![], vec![], vec![]).unwrap().is_empty());
    }
}
