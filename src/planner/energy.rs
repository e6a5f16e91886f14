use crate::models::{ActivityLevel, DietProfile, NutrientProfile, Sex};
use crate::planner::constants::*;

/// Resting metabolic rate in kcal/day.
///
/// Formula: 9.99·weight + 6.25·height − 4.92·age + (5 | −161)
pub fn resting_rate(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => RMR_MALE_OFFSET,
        Sex::Female => RMR_FEMALE_OFFSET,
    };
    RMR_WEIGHT_COEFF * weight_kg + RMR_HEIGHT_COEFF * height_cm - RMR_AGE_COEFF * age_years
        + offset
}

/// Daily energy need from the resting rate and activity level.
pub fn daily_calories(rmr: f64, activity: ActivityLevel) -> f64 {
    rmr * activity.factor()
}

/// Daily macro targets in grams for a calorie budget.
pub fn macro_targets(calories: f64, diet: DietProfile) -> NutrientProfile {
    diet.grams_per_kcal().scale(calories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_rate_offsets() {
        let male = resting_rate(70.0, 170.0, 25.0, Sex::Male);
        let female = resting_rate(70.0, 170.0, 25.0, Sex::Female);
        assert!((male - 1643.8).abs() < 1e-9);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_calories_factors() {
        assert!((daily_calories(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < 1e-9);
        assert!((daily_calories(1000.0, ActivityLevel::Light) - 1375.0).abs() < 1e-9);
        assert!((daily_calories(1000.0, ActivityLevel::Moderate) - 1550.0).abs() < 1e-9);
        assert!((daily_calories(1000.0, ActivityLevel::VeryActive) - 1725.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_targets_low_carb() {
        let t = macro_targets(2000.0, DietProfile::LowCarb);
        assert!((t.carbohydrate - 2000.0 * 0.20 / 4.1).abs() < 1e-9);
        assert!((t.protein - 2000.0 * 0.30 / 4.1).abs() < 1e-9);
        assert!((t.fat - 2000.0 * 0.50 / 8.8).abs() < 1e-9);
    }
}
