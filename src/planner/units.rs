use tracing::warn;

/// A recognised quantity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Small,
    Medium,
    Large,
    Cup,
    Tablespoon,
    Teaspoon,
    Ounce,
    Pound,
    Gram,
    Milliliter,
    /// Piece, item, unit or egg: one whole food.
    Piece,
}

impl Unit {
    /// Parse a unit name, case-insensitive. `None` for anything unknown.
    pub fn parse(unit: &str) -> Option<Unit> {
        let unit = unit.trim().to_lowercase();
        let parsed = match unit.as_str() {
            "small" | "sm" => Unit::Small,
            "medium" | "med" | "md" => Unit::Medium,
            "large" | "lg" | "big" => Unit::Large,
            "cup" | "cups" => Unit::Cup,
            "tbsp" | "tablespoon" | "tablespoons" => Unit::Tablespoon,
            "tsp" | "teaspoon" | "teaspoons" => Unit::Teaspoon,
            "oz" | "ounce" | "ounces" => Unit::Ounce,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Pound,
            "g" | "gram" | "grams" => Unit::Gram,
            "ml" | "milliliter" | "milliliters" => Unit::Milliliter,
            "piece" | "pieces" | "item" | "items" | "unit" | "units" | "egg" | "eggs" => {
                Unit::Piece
            }
            _ => return None,
        };
        Some(parsed)
    }

    /// Grams in one of this unit of the described food.
    ///
    /// Volume units assume the density of water.
    pub fn grams_per_unit(self, food_description: &str) -> f64 {
        let food = FoodKind::from_description(food_description);
        match self {
            Unit::Small => match food {
                FoodKind::Egg => 50.0,
                _ => 100.0,
            },
            Unit::Medium => match food {
                FoodKind::Egg => 60.0,
                FoodKind::Apple => 182.0,
                FoodKind::Banana => 118.0,
                FoodKind::Orange => 131.0,
                FoodKind::Other => 150.0,
            },
            Unit::Large => match food {
                FoodKind::Egg => 70.0,
                FoodKind::Apple => 223.0,
                FoodKind::Banana => 136.0,
                _ => 200.0,
            },
            Unit::Cup => 240.0,
            Unit::Tablespoon => 15.0,
            Unit::Teaspoon => 5.0,
            Unit::Ounce => 28.35,
            Unit::Pound => 453.59,
            Unit::Gram | Unit::Milliliter => 1.0,
            Unit::Piece => match food {
                FoodKind::Egg => 60.0,
                FoodKind::Banana => 118.0,
                FoodKind::Apple => 182.0,
                FoodKind::Orange => 131.0,
                FoodKind::Other => 150.0,
            },
        }
    }
}

/// Foods with their own size defaults. First match wins, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FoodKind {
    Egg,
    Apple,
    Banana,
    Orange,
    Other,
}

impl FoodKind {
    fn from_description(description: &str) -> Self {
        let description = description.to_lowercase();
        if description.contains("egg") {
            FoodKind::Egg
        } else if description.contains("apple") {
            FoodKind::Apple
        } else if description.contains("banana") {
            FoodKind::Banana
        } else if description.contains("orange") {
            FoodKind::Orange
        } else {
            FoodKind::Other
        }
    }
}

/// Convert a user-entered quantity to grams.
///
/// Unknown units are taken to already be grams.
pub fn to_grams(quantity: f64, unit: &str, food_description: &str) -> f64 {
    match Unit::parse(unit) {
        Some(u) => quantity * u.grams_per_unit(food_description),
        None => {
            warn!(unit, "Unknown unit, treating as grams");
            quantity
        }
    }
}
