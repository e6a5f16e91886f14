/// kcal per gram of carbohydrate used for the diet split.
///
/// Deliberately 4.1 rather than the Atwater 4; recommendation outputs
/// depend on this value.
pub const CARBOHYDRATE_KCAL_PER_GRAM: f64 = 4.1;

/// kcal per gram of protein used for the diet split.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.1;

/// kcal per gram of fat used for the diet split (Atwater would be 9).
pub const FAT_KCAL_PER_GRAM: f64 = 8.8;

/// Activity multipliers indexed by activity level 0-3.
pub const ACTIVITY_FACTORS: [f64; 4] = [1.2, 1.375, 1.55, 1.725];

// ─────────────────────────────────────────────────────────────────────────────
// Resting-rate equation coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const RMR_WEIGHT_COEFF: f64 = 9.99;
pub const RMR_HEIGHT_COEFF: f64 = 6.25;
pub const RMR_AGE_COEFF: f64 = 4.92;
pub const RMR_MALE_OFFSET: f64 = 5.0;
pub const RMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Printable cuboid limits (cm)
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest printable cuboid (x, y, z) in cm.
pub const MIN_SIZE_CM: [f64; 3] = [8.0, 8.0, 0.15];

/// Largest printable cuboid (x, y, z) in cm.
pub const MAX_SIZE_CM: [f64; 3] = [15.0, 13.0, 2.2];

/// Volume of the largest printable cuboid in cm³.
pub const MAX_VOLUME_CM3: f64 = MAX_SIZE_CM[0] * MAX_SIZE_CM[1] * MAX_SIZE_CM[2];

/// Scan step for the x/y search in cm.
pub const DIMENSION_STEP_CM: f64 = 0.1;

/// cm to mm.
pub const MM_PER_CM: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Solver policy
// ─────────────────────────────────────────────────────────────────────────────

/// Residual (grams, L2) below which a pair is accepted outright.
pub const DEFAULT_TOLERANCE: f64 = 400.0;

/// Number of ranked recommendations returned.
pub const DEFAULT_MAX_SOLUTIONS: usize = 2;

/// Gram amounts are reported to this many decimals.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Relative determinant threshold below which the pair's normal
/// equations are treated as rank deficient.
pub const SINGULAR_EPSILON: f64 = 1e-12;
