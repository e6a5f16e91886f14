//! Nutrient lookup collaborators.
//!
//! The recommendation core never calls these; they turn logged foods into
//! the "current intake" vector a request needs.

mod cache;
mod catalog;

pub use cache::{EvictionPolicy, NeverExpire, NutrientCache, TtlPolicy};
pub use catalog::CatalogLookup;

use crate::error::Result;
use crate::models::NutrientProfile;
use crate::planner::units::to_grams;

/// Source of per-gram nutrient profiles by food name.
pub trait NutrientLookup {
    fn per_gram(&self, food: &str) -> Result<NutrientProfile>;
}

/// Per-gram profile for `food`, served from `cache` when fresh.
pub fn lookup_cached<L, P>(
    lookup: &L,
    cache: &mut NutrientCache<P>,
    food: &str,
) -> Result<NutrientProfile>
where
    L: NutrientLookup + ?Sized,
    P: EvictionPolicy,
{
    if let Some(profile) = cache.get(food) {
        return Ok(profile);
    }
    let profile = lookup.per_gram(food)?;
    cache.insert(food, profile);
    Ok(profile)
}

/// Macros in `quantity` `unit` of `food`.
pub fn lookup_quantity<L, P>(
    lookup: &L,
    cache: &mut NutrientCache<P>,
    food: &str,
    quantity: f64,
    unit: &str,
) -> Result<NutrientProfile>
where
    L: NutrientLookup + ?Sized,
    P: EvictionPolicy,
{
    let per_gram = lookup_cached(lookup, cache, food)?;
    Ok(per_gram.scale(to_grams(quantity, unit, food)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::error::SupplementError;

    struct CountingLookup {
        calls: Cell<usize>,
    }

    impl NutrientLookup for CountingLookup {
        fn per_gram(&self, food: &str) -> Result<NutrientProfile> {
            self.calls.set(self.calls.get() + 1);
            match food {
                "rice" => Ok(NutrientProfile::new(0.28, 0.027, 0.003)),
                other => Err(SupplementError::UnknownFood(other.to_string())),
            }
        }
    }

    #[test]
    fn test_cached_lookup_hits_source_once() {
        let lookup = CountingLookup {
            calls: Cell::new(0),
        };
        let mut cache = NutrientCache::new(NeverExpire, 8);

        lookup_cached(&lookup, &mut cache, "rice").unwrap();
        lookup_cached(&lookup, &mut cache, "RICE").unwrap();
        assert_eq!(lookup.calls.get(), 1);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let lookup = CountingLookup {
            calls: Cell::new(0),
        };
        let mut cache = NutrientCache::new(NeverExpire, 8);

        assert!(lookup_cached(&lookup, &mut cache, "durian").is_err());
        assert!(lookup_cached(&lookup, &mut cache, "durian").is_err());
        assert_eq!(lookup.calls.get(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lookup_quantity_converts_units() {
        let lookup = CountingLookup {
            calls: Cell::new(0),
        };
        let mut cache = NutrientCache::new(NeverExpire, 8);

        let cup = lookup_quantity(&lookup, &mut cache, "rice", 1.0, "cup").unwrap();
        assert!((cup.carbohydrate - 67.2).abs() < 1e-9);
    }
}
