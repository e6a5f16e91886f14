use strsim::jaro_winkler;

use crate::error::{Result, SupplementError};
use crate::lookup::NutrientLookup;
use crate::models::{CATALOG, FoodCandidate, NutrientProfile};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Lookup backed by the built-in supplementation catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLookup<'a> {
    foods: &'a [FoodCandidate],
}

impl Default for CatalogLookup<'static> {
    fn default() -> Self {
        Self { foods: &CATALOG }
    }
}

impl<'a> CatalogLookup<'a> {
    pub fn new(foods: &'a [FoodCandidate]) -> Self {
        Self { foods }
    }

    /// Resolve a user-typed name: exact (case-insensitive) first, then the
    /// closest fuzzy match above the threshold.
    pub fn find(&self, name: &str) -> Option<&'a FoodCandidate> {
        let wanted = name.trim().to_lowercase();

        if let Some(food) = self.foods.iter().find(|f| f.key() == wanted) {
            return Some(food);
        }

        self.foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &wanted)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(f, _)| f)
    }
}

impl NutrientLookup for CatalogLookup<'_> {
    fn per_gram(&self, food: &str) -> Result<NutrientProfile> {
        self.find(food)
            .map(|f| f.nutrients)
            .ok_or_else(|| SupplementError::UnknownFood(food.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        let lookup = CatalogLookup::default();
        assert_eq!(lookup.find("AVOCADO").unwrap().name, "Avocado");
        assert_eq!(lookup.find(" chicken breast ").unwrap().name, "Chicken Breast");
    }

    #[test]
    fn test_fuzzy_match() {
        let lookup = CatalogLookup::default();
        assert_eq!(lookup.find("avocdo").unwrap().name, "Avocado");
        assert_eq!(lookup.find("red lentil").unwrap().name, "Red Lentils");
    }

    #[test]
    fn test_unknown_food_errors() {
        let lookup = CatalogLookup::default();
        assert!(matches!(
            lookup.per_gram("pizza"),
            Err(SupplementError::UnknownFood(_))
        ));
    }
}
