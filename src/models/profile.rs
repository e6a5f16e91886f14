use crate::error::{Result, SupplementError};
use crate::models::nutrients::NutrientProfile;
use crate::planner::constants::{
    ACTIVITY_FACTORS, CARBOHYDRATE_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};

/// Sex convention of the resting-rate equation (0 = male, 1 = female).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl TryFrom<i64> for Sex {
    type Error = SupplementError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Sex::Male),
            1 => Ok(Sex::Female),
            other => Err(SupplementError::InvalidInput(format!(
                "sex must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to the resting rate.
    pub fn factor(self) -> f64 {
        ACTIVITY_FACTORS[self as usize]
    }
}

impl TryFrom<i64> for ActivityLevel {
    type Error = SupplementError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(ActivityLevel::Sedentary),
            1 => Ok(ActivityLevel::Light),
            2 => Ok(ActivityLevel::Moderate),
            3 => Ok(ActivityLevel::VeryActive),
            other => Err(SupplementError::InvalidInput(format!(
                "activity level must be 0-3, got {}",
                other
            ))),
        }
    }
}

/// Diet preset: the share of daily energy given to each macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietProfile {
    Balanced,
    LowFat,
    LowCarb,
    HighProtein,
}

impl DietProfile {
    pub const ALL: [DietProfile; 4] = [
        DietProfile::Balanced,
        DietProfile::LowFat,
        DietProfile::LowCarb,
        DietProfile::HighProtein,
    ];

    /// Energy fractions (carbohydrate, protein, fat). Each triple sums to 1.
    pub fn energy_split(self) -> (f64, f64, f64) {
        match self {
            DietProfile::Balanced => (0.50, 0.20, 0.30),
            DietProfile::LowFat => (0.60, 0.20, 0.20),
            DietProfile::LowCarb => (0.20, 0.30, 0.50),
            DietProfile::HighProtein => (0.28, 0.39, 0.33),
        }
    }

    /// Grams of each macro per kcal of daily energy.
    pub fn grams_per_kcal(self) -> NutrientProfile {
        let (c, p, f) = self.energy_split();
        NutrientProfile::new(
            c / CARBOHYDRATE_KCAL_PER_GRAM,
            p / PROTEIN_KCAL_PER_GRAM,
            f / FAT_KCAL_PER_GRAM,
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            DietProfile::Balanced => "balanced",
            DietProfile::LowFat => "low fat",
            DietProfile::LowCarb => "low carb",
            DietProfile::HighProtein => "high protein",
        }
    }
}

impl TryFrom<i64> for DietProfile {
    type Error = SupplementError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| DietProfile::ALL.get(i).copied())
            .ok_or_else(|| {
                SupplementError::InvalidInput(format!("diet must be 0-3, got {}", value))
            })
    }
}

/// Parse the 0/1 dietary preference flag.
pub fn preference_from_int(value: i64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SupplementError::InvalidInput(format!(
            "preference must be 0 or 1, got {}",
            other
        ))),
    }
}

/// Validated inputs for one recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub sex: Sex,
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Macros already eaten today.
    pub current: NutrientProfile,
    pub activity: ActivityLevel,
    pub diet: DietProfile,
    /// When set, chicken breast is excluded instead of lentils.
    pub preference: bool,
}

impl RecommendationRequest {
    /// Build a request from raw form values, rejecting anything out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        sex: i64,
        age_years: f64,
        height_cm: f64,
        weight_kg: f64,
        current: NutrientProfile,
        activity: i64,
        diet: i64,
        preference: i64,
    ) -> Result<Self> {
        if !(age_years.is_finite() && age_years >= 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "age must be a non-negative number, got {}",
                age_years
            )));
        }
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "height must be positive, got {}",
                height_cm
            )));
        }
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(SupplementError::InvalidInput(format!(
                "weight must be positive, got {}",
                weight_kg
            )));
        }
        if !current.is_finite() {
            return Err(SupplementError::InvalidInput(
                "current intake must be finite".to_string(),
            ));
        }

        Ok(Self {
            sex: Sex::try_from(sex)?,
            age_years,
            height_cm,
            weight_kg,
            current,
            activity: ActivityLevel::try_from(activity)?,
            diet: DietProfile::try_from(diet)?,
            preference: preference_from_int(preference)?,
        })
    }
}
