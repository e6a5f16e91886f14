use std::ops::{Add, AddAssign, Index, Sub};

use serde::{Deserialize, Serialize};

/// The three macro-nutrients tracked by the planner, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Carbohydrate,
    Protein,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Carbohydrate, Macro::Protein, Macro::Fat];

    pub fn name(self) -> &'static str {
        match self {
            Macro::Carbohydrate => "carbohydrate",
            Macro::Protein => "protein",
            Macro::Fat => "fat",
        }
    }
}

/// Grams of carbohydrate, protein and fat.
///
/// Components may be negative when used as a need vector: a negative
/// value means the target for that macro is already exceeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub carbohydrate: f64,
    pub protein: f64,
    pub fat: f64,
}

impl NutrientProfile {
    pub const fn new(carbohydrate: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbohydrate,
            protein,
            fat,
        }
    }

    /// Components in `Macro::ALL` order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.carbohydrate, self.protein, self.fat]
    }

    /// Multiply every component by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.carbohydrate * factor,
            self.protein * factor,
            self.fat * factor,
        )
    }

    /// Which macros are still in deficit (strictly positive need).
    pub fn positive_mask(&self) -> [bool; 3] {
        self.to_array().map(|v| v > 0.0)
    }

    pub fn has_positive(&self) -> bool {
        self.positive_mask().iter().any(|&m| m)
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Copy with every component rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::new(
            round_to(self.carbohydrate, decimals),
            round_to(self.protein, decimals),
            round_to(self.fat, decimals),
        )
    }
}

impl Index<Macro> for NutrientProfile {
    type Output = f64;

    fn index(&self, m: Macro) -> &f64 {
        match m {
            Macro::Carbohydrate => &self.carbohydrate,
            Macro::Protein => &self.protein,
            Macro::Fat => &self.fat,
        }
    }
}

impl Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, rhs: NutrientProfile) -> NutrientProfile {
        NutrientProfile::new(
            self.carbohydrate + rhs.carbohydrate,
            self.protein + rhs.protein,
            self.fat + rhs.fat,
        )
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, rhs: NutrientProfile) {
        *self = *self + rhs;
    }
}

impl Sub for NutrientProfile {
    type Output = NutrientProfile;

    fn sub(self, rhs: NutrientProfile) -> NutrientProfile {
        NutrientProfile::new(
            self.carbohydrate - rhs.carbohydrate,
            self.protein - rhs.protein,
            self.fat - rhs.fat,
        )
    }
}

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_mask() {
        let need = NutrientProfile::new(12.0, -3.0, 0.0);
        assert_eq!(need.positive_mask(), [true, false, false]);
        assert!(need.has_positive());

        let met = NutrientProfile::new(-1.0, 0.0, -0.5);
        assert!(!met.has_positive());
    }

    #[test]
    fn test_sub_and_index() {
        let target = NutrientProfile::new(300.0, 120.0, 80.0);
        let eaten = NutrientProfile::new(100.0, 130.0, 20.0);
        let need = target - eaten;
        assert_eq!(need[Macro::Carbohydrate], 200.0);
        assert_eq!(need[Macro::Protein], -10.0);
        assert_eq!(need[Macro::Fat], 60.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.005, 0), 2.0);
        assert_eq!(round_to(-7.777, 1), -7.8);
    }
}
