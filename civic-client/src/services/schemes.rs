//! Government schemes

use shared::models::{ALL_CATEGORIES, Scheme};

use crate::search::{SearchMethod, multi_field_search};
use crate::seed;

/// National scheme portal, where full scheme details live
pub const MYSCHEME_URL: &str = "https://www.myscheme.gov.in/";

pub struct SchemeService {
    schemes: Vec<Scheme>,
}

impl SchemeService {
    pub fn new() -> Self {
        Self {
            schemes: seed::schemes(),
        }
    }

    /// Schemes in `category`; `None` or "सभी" lists everything
    pub fn schemes(&self, category: Option<&str>) -> Vec<Scheme> {
        match category {
            None | Some(ALL_CATEGORIES) => self.schemes.clone(),
            Some(category) => self
                .schemes
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect(),
        }
    }

    /// Distinct categories in listing order, led by "सभी"
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for scheme in &self.schemes {
            if !categories.contains(&scheme.category) {
                categories.push(scheme.category.clone());
            }
        }
        categories
    }

    pub fn search(&self, query: &str) -> Vec<Scheme> {
        multi_field_search(
            &self.schemes,
            query,
            |s| vec![s.name.as_str(), s.description.as_str()],
            SearchMethod::Simple,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    /// Where to read more about a scheme
    pub fn external_details_url(&self, _scheme_id: u32) -> &'static str {
        MYSCHEME_URL
    }
}

impl Default for SchemeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        let service = SchemeService::new();
        assert_eq!(service.schemes(None).len(), 5);
        assert_eq!(service.schemes(Some("सभी")).len(), 5);

        let farming = service.schemes(Some("कृषि"));
        assert_eq!(farming.len(), 1);
        assert_eq!(farming[0].id, 2);

        assert!(service.schemes(Some("खेल")).is_empty());
    }

    #[test]
    fn test_categories() {
        let categories = SchemeService::new().categories();
        assert_eq!(categories[0], "सभी");
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn test_search_and_link() {
        let service = SchemeService::new();
        let hits = service.search("स्वास्थ्य बीमा");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "आयुष्मान भारत");
        assert_eq!(service.external_details_url(3), "https://www.myscheme.gov.in/");
    }
}
