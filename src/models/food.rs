use serde::Serialize;

use crate::models::nutrients::NutrientProfile;

/// Number of foods in the supplementation catalog.
pub const CATALOG_SIZE: usize = 4;

/// Catalog index of red lentils, excluded when no preference is set.
pub const LENTILS_INDEX: usize = 1;

/// Catalog index of chicken breast, excluded when the preference is set.
pub const CHICKEN_INDEX: usize = 3;

/// A food that can be recommended as a supplement.
///
/// Nutrients are stored per gram as a fraction of weight, so `amount *
/// nutrients` gives grams of each macro.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCandidate {
    pub name: &'static str,
    pub nutrients: NutrientProfile,
    /// Density in g/cm³.
    pub density: f64,
}

impl FoodCandidate {
    /// Build a candidate from the usual per-100g label values.
    pub const fn per_hundred_grams(
        name: &'static str,
        carbohydrate: f64,
        protein: f64,
        fat: f64,
        density: f64,
    ) -> Self {
        Self {
            name,
            nutrients: NutrientProfile::new(carbohydrate * 0.01, protein * 0.01, fat * 0.01),
            density,
        }
    }

    /// Volume in cm³ occupied by `grams` of this food.
    #[inline]
    pub fn volume_of(&self, grams: f64) -> f64 {
        grams / self.density
    }

    /// Upper bound on the solver's gram amount for this food.
    ///
    /// This is the volume limit divided by density, which is the bound the
    /// recommendation outputs have always been computed with; it is looser
    /// than the physical `max_volume * density` for every catalog food.
    #[inline]
    pub fn amount_bound(&self, max_volume_cm3: f64) -> f64 {
        max_volume_cm3 / self.density
    }

    /// Macros supplied by `grams` of this food.
    pub fn supply(&self, grams: f64) -> NutrientProfile {
        self.nutrients.scale(grams)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The fixed supplementation catalog.
pub static CATALOG: [FoodCandidate; CATALOG_SIZE] = [
    FoodCandidate::per_hundred_grams("Purple Sweet Potato", 17.0, 1.56, 0.05, 0.81),
    FoodCandidate::per_hundred_grams("Red Lentils", 11.2, 6.6, 0.61, 1.182),
    FoodCandidate::per_hundred_grams("Avocado", 1.4, 1.38, 12.1, 0.63),
    FoodCandidate::per_hundred_grams("Chicken Breast", 0.06, 19.8, 1.15, 0.82),
];

/// Catalog index left out of every pair for the given preference.
pub fn excluded_index(preference: bool) -> usize {
    if preference { CHICKEN_INDEX } else { LENTILS_INDEX }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_per_gram_values() {
        let avocado = &CATALOG[2];
        assert_eq!(avocado.name, "Avocado");
        assert!((avocado.nutrients.fat - 0.121).abs() < 1e-12);
        assert!((avocado.nutrients.carbohydrate - 0.014).abs() < 1e-12);
    }

    #[test]
    fn test_volume_and_amount_bound() {
        let lentils = &CATALOG[LENTILS_INDEX];
        assert!((lentils.volume_of(118.2) - 100.0).abs() < 1e-9);
        assert!((lentils.amount_bound(118.2) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_supply() {
        let chicken = &CATALOG[CHICKEN_INDEX];
        let supplied = chicken.supply(200.0);
        assert!((supplied.protein - 39.6).abs() < 1e-9);
        assert!((supplied.fat - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_excluded_index() {
        assert_eq!(excluded_index(true), 3);
        assert_eq!(excluded_index(false), 1);
    }
}
