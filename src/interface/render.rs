use crate::models::{CuboidDimensions, FoodCandidate, Macro, Recommendation};

/// Display a recommendation in a formatted table.
pub fn display_recommendation(rec: &Recommendation) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("Calories: {:.0} kcal", rec.calories);
    for m in Macro::ALL {
        println!(
            "  {:<13} target {:>7.1} g | still needed {:>7.1} g",
            m.name(),
            rec.intake[m],
            rec.needed[m]
        );
    }
    println!();

    if rec.degraded {
        println!("No food pair could cover the remaining need; showing targets only.");
        println!();
        return;
    }

    if rec.results.is_empty() {
        println!("All targets already met; nothing to supplement.");
        println!();
        return;
    }

    println!("=== Recommendations ===");
    println!();

    let max_name_len = rec
        .results
        .iter()
        .flat_map(|r| r.items.iter().map(|i| i.name.len()))
        .max()
        .unwrap_or(10);

    for (i, entry) in rec.results.iter().enumerate() {
        println!("#{} (error {:.2} g)", i + 1, entry.residual);
        for item in &entry.items {
            println!(
                "    {:<width$}  {:>7.2} g  -> {:.1} x {:.1} x {:.2} mm",
                item.name,
                item.gram,
                item.x,
                item.y,
                item.z,
                width = max_name_len
            );
        }
        println!(
            "    adds C:{:.2} P:{:.2} F:{:.2}",
            entry.supplement.carbohydrate, entry.supplement.protein, entry.supplement.fat
        );
        println!();
    }
}

/// Display the catalog of supplement foods.
pub fn display_catalog(foods: &[FoodCandidate]) {
    println!();
    println!("=== Catalog ({} foods) ===", foods.len());
    println!();

    for (i, food) in foods.iter().enumerate() {
        println!(
            "  {}. {} - per 100 g C:{:.2} P:{:.2} F:{:.2}, density {} g/cm3",
            i,
            food.name,
            food.nutrients.carbohydrate * 100.0,
            food.nutrients.protein * 100.0,
            food.nutrients.fat * 100.0,
            food.density
        );
    }

    println!();
}

pub fn display_dimensions(volume_cm3: f64, dims: &CuboidDimensions) {
    if dims.is_valid() {
        println!(
            "{:.2} cm3 -> {:.2} x {:.2} x {:.2} mm",
            volume_cm3, dims.x, dims.y, dims.z
        );
    } else {
        println!("{:.2} cm3 -> no printable cuboid", volume_cm3);
    }
}
