use serde::Serialize;
use serde_json::{Value, json};

use crate::models::nutrients::{NutrientProfile, round_to};

/// One solved food pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCandidate {
    /// Catalog indices, ascending.
    pub pair: (usize, usize),
    /// Grams of each food in `pair` order.
    pub amounts: [f64; 2],
    /// L2 distance to the need vector over the macros in deficit.
    pub residual: f64,
}

impl SolutionCandidate {
    pub fn indices(&self) -> [usize; 2] {
        [self.pair.0, self.pair.1]
    }

    pub fn contains(&self, index: usize) -> bool {
        self.pair.0 == index || self.pair.1 == index
    }

    pub fn amounts_positive(&self) -> bool {
        self.amounts.iter().all(|&a| a > 0.0)
    }
}

/// Solver result that keeps the fallback path explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// The search ran. Empty when nothing needs supplementing.
    Optimized(Vec<SolutionCandidate>),
    /// A macro is in deficit but no pair produced usable amounts;
    /// only the need itself can be reported.
    Degraded(NutrientProfile),
}

impl SolveOutcome {
    pub fn solutions(&self) -> &[SolutionCandidate] {
        match self {
            SolveOutcome::Optimized(solutions) => solutions,
            SolveOutcome::Degraded(_) => &[],
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SolveOutcome::Degraded(_))
    }
}

/// Cuboid edge lengths in millimetres. All zero means no valid shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CuboidDimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CuboidDimensions {
    pub const INVALID: CuboidDimensions = CuboidDimensions {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_valid(&self) -> bool {
        self.x != 0.0 && self.y != 0.0 && self.z != 0.0
    }

    pub fn volume_mm3(&self) -> f64 {
        self.x * self.y * self.z
    }
}

/// A recommended amount of one food with its printable shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: String,
    /// File name the geometry exporter should write the cuboid to.
    pub mesh: String,
    pub gram: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One ranked recommendation: the foods and what they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "(Vec<FoodItem>, f64, f64, f64)")]
pub struct RecommendationEntry {
    pub items: Vec<FoodItem>,
    pub supplement: NutrientProfile,
    pub residual: f64,
}

impl From<RecommendationEntry> for (Vec<FoodItem>, f64, f64, f64) {
    fn from(entry: RecommendationEntry) -> Self {
        (
            entry.items,
            entry.supplement.carbohydrate,
            entry.supplement.protein,
            entry.supplement.fat,
        )
    }
}

/// Full answer for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub calories: f64,
    /// Daily macro targets.
    pub intake: NutrientProfile,
    /// Targets minus what was already eaten.
    pub needed: NutrientProfile,
    pub results: Vec<RecommendationEntry>,
    pub degraded: bool,
}

impl Recommendation {
    /// Caller-facing mapping, two-decimal rounding on the headline numbers.
    pub fn to_json(&self) -> Value {
        json!({
            "calories": round_to(self.calories, 2),
            "carbohydrate_intake": round_to(self.intake.carbohydrate, 2),
            "protein_intake": round_to(self.intake.protein, 2),
            "fat_intake": round_to(self.intake.fat, 2),
            "carbohydrate_needed": round_to(self.needed.carbohydrate, 2),
            "protein_needed": round_to(self.needed.protein, 2),
            "fat_needed": round_to(self.needed.fat, 2),
            "results": self.results,
            "degraded": self.degraded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_as_tuple() {
        let entry = RecommendationEntry {
            items: vec![FoodItem {
                name: "Avocado".to_string(),
                mesh: "0_Avocado.stl".to_string(),
                gram: 50.0,
                x: 80.0,
                y: 80.0,
                z: 12.4,
            }],
            supplement: NutrientProfile::new(0.7, 0.69, 6.05),
            residual: 3.0,
        };

        let value = serde_json::to_value(&entry).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[0][0]["name"], "Avocado");
        assert_eq!(arr[0][0]["mesh"], "0_Avocado.stl");
        assert_eq!(arr[3], 6.05);
    }

    #[test]
    fn test_to_json_keys() {
        let rec = Recommendation {
            calories: 2547.889,
            intake: NutrientProfile::new(310.7182, 124.29, 86.86),
            needed: NutrientProfile::new(310.7182, 124.29, 86.86),
            results: Vec::new(),
            degraded: false,
        };
        let value = rec.to_json();
        assert_eq!(value["calories"], 2547.89);
        assert_eq!(value["carbohydrate_intake"], 310.72);
        for key in [
            "protein_intake",
            "fat_intake",
            "carbohydrate_needed",
            "protein_needed",
            "fat_needed",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert!(value["results"].as_array().unwrap().is_empty());
        assert_eq!(value["degraded"], false);
    }

    #[test]
    fn test_cuboid_validity() {
        assert!(!CuboidDimensions::INVALID.is_valid());
        assert!(CuboidDimensions::new(80.0, 80.0, 1.5).is_valid());
    }

    #[test]
    fn test_solve_outcome_solutions() {
        let degraded = SolveOutcome::Degraded(NutrientProfile::new(1.0, 0.0, 0.0));
        assert!(degraded.is_degraded());
        assert!(degraded.solutions().is_empty());
    }
}
