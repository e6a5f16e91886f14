use tracing::{debug, info};

use crate::config::RecommenderConfig;
use crate::models::food::excluded_index;
use crate::models::nutrients::round_to;
use crate::models::{
    CATALOG, FoodCandidate, FoodItem, NutrientProfile, Recommendation, RecommendationEntry,
    RecommendationRequest, SolutionCandidate,
};
use crate::planner::constants::AMOUNT_DECIMALS;
use crate::planner::dimensions::DimensionMapper;
use crate::planner::energy::{daily_calories, macro_targets, resting_rate};
use crate::planner::solver::CandidateSolver;

/// Turn one ranked solution into printable items and supplement totals.
///
/// Amounts are rounded to two decimals first; foods that round to zero are
/// dropped. A food whose volume has no valid cuboid still counts toward the
/// totals but gets no item.
pub fn annotate_solution(
    rank: usize,
    solution: &SolutionCandidate,
    catalog: &[FoodCandidate],
    mapper: &DimensionMapper,
) -> RecommendationEntry {
    let mut items = Vec::new();
    let mut supplement = NutrientProfile::default();

    for (index, amount) in solution.indices().into_iter().zip(solution.amounts) {
        let gram = round_to(amount, AMOUNT_DECIMALS);
        if gram == 0.0 {
            continue;
        }

        let food = &catalog[index];
        supplement += food.supply(gram);

        let dims = mapper.dimensions_for(food.volume_of(gram));
        if !dims.is_valid() {
            debug!(food = food.name, gram, "No printable cuboid, omitting item");
            continue;
        }

        items.push(FoodItem {
            name: food.name.to_string(),
            mesh: format!("{}_{}.stl", rank, food.name),
            gram,
            x: round_to(dims.x, 2),
            y: round_to(dims.y, 2),
            z: round_to(dims.z, 2),
        });
    }

    RecommendationEntry {
        items,
        supplement: supplement.rounded(2),
        residual: solution.residual,
    }
}

/// Compute targets, the remaining need and ranked food recommendations.
pub fn recommend(request: &RecommendationRequest, config: &RecommenderConfig) -> Recommendation {
    let rmr = resting_rate(
        request.weight_kg,
        request.height_cm,
        request.age_years,
        request.sex,
    );
    let calories = daily_calories(rmr, request.activity);
    let intake = macro_targets(calories, request.diet);
    let needed = intake - request.current;

    let solver = CandidateSolver::from_config(config);
    let mapper = DimensionMapper::with_step(config.dimension_step_cm);
    let outcome = solver.solve_outcome(
        &needed,
        &CATALOG,
        excluded_index(request.preference),
        config.max_volume_cm3,
    );

    let results: Vec<RecommendationEntry> = outcome
        .solutions()
        .iter()
        .enumerate()
        .map(|(rank, solution)| annotate_solution(rank, solution, &CATALOG, &mapper))
        .collect();

    info!(
        calories = round_to(calories, 2),
        diet = request.diet.name(),
        solutions = results.len(),
        degraded = outcome.is_degraded(),
        "Recommendation computed"
    );

    Recommendation {
        calories,
        intake,
        needed,
        results,
        degraded: outcome.is_degraded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, DietProfile, Sex};

    fn sample_request() -> RecommendationRequest {
        RecommendationRequest {
            sex: Sex::Male,
            age_years: 25.0,
            height_cm: 170.0,
            weight_kg: 70.0,
            current: NutrientProfile::default(),
            activity: ActivityLevel::Moderate,
            diet: DietProfile::Balanced,
            preference: false,
        }
    }

    #[test]
    fn test_annotate_rounds_and_names_meshes() {
        let solution = SolutionCandidate {
            pair: (0, 2),
            amounts: [100.004, 50.0],
            residual: 12.0,
        };
        let entry = annotate_solution(1, &solution, &CATALOG, &DimensionMapper::default());

        assert_eq!(entry.items.len(), 2);
        assert_eq!(entry.items[0].gram, 100.0);
        assert_eq!(entry.items[0].mesh, "1_Purple Sweet Potato.stl");
        assert_eq!(entry.items[1].name, "Avocado");
        // 100 g sweet potato + 50 g avocado
        assert_eq!(entry.supplement.carbohydrate, 17.7);
        assert_eq!(entry.supplement.fat, 6.1);
    }

    #[test]
    fn test_annotate_skips_zero_amounts() {
        let solution = SolutionCandidate {
            pair: (2, 3),
            amounts: [0.001, 150.0],
            residual: 1.0,
        };
        let entry = annotate_solution(0, &solution, &CATALOG, &DimensionMapper::default());
        assert_eq!(entry.items.len(), 1);
        assert_eq!(entry.items[0].name, "Chicken Breast");
        assert_eq!(entry.supplement.protein, 29.7);
    }

    #[test]
    fn test_annotate_keeps_totals_for_unprintable_food() {
        let solution = SolutionCandidate {
            pair: (0, 3),
            amounts: [200.0, 200.0],
            residual: 1.0,
        };
        let entry = annotate_solution(0, &solution, &CATALOG, &DimensionMapper::with_step(10.0));
        // Both volumes (~247 and ~244 cm³) have no fit on the coarse grid.
        assert!(entry.items.is_empty());
        assert_eq!(entry.supplement.carbohydrate, 34.12);
    }

    #[test]
    fn test_recommend_targets() {
        let rec = recommend(&sample_request(), &RecommenderConfig::default());
        let expected_calories = 1643.8 * 1.55;
        assert!((rec.calories - expected_calories).abs() < 1e-6);
        assert!((rec.intake.carbohydrate - expected_calories * 0.5 / 4.1).abs() < 1e-6);
        assert_eq!(rec.needed, rec.intake);
        assert!(!rec.degraded);
        assert!(!rec.results.is_empty());
    }

    #[test]
    fn test_recommend_nothing_needed() {
        let mut request = sample_request();
        request.current = NutrientProfile::new(1000.0, 1000.0, 1000.0);
        let rec = recommend(&request, &RecommenderConfig::default());
        assert!(rec.results.is_empty());
        assert!(!rec.degraded);
        assert!(rec.needed.carbohydrate < 0.0);
    }
}
