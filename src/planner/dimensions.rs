use crate::models::CuboidDimensions;
use crate::planner::constants::{DIMENSION_STEP_CM, MAX_SIZE_CM, MIN_SIZE_CM, MM_PER_CM};

/// Maps a food volume to printable cuboid dimensions.
///
/// The search walks x then y upward from the minimum size in fixed steps
/// and takes the first shape whose height fits. The result is
/// deterministic but not the most compact cuboid available.
#[derive(Debug, Clone)]
pub struct DimensionMapper {
    /// Minimum (x, y, z) in cm.
    pub min_cm: [f64; 3],
    /// Maximum (x, y, z) in cm.
    pub max_cm: [f64; 3],
    pub step_cm: f64,
}

impl Default for DimensionMapper {
    fn default() -> Self {
        Self {
            min_cm: MIN_SIZE_CM,
            max_cm: MAX_SIZE_CM,
            step_cm: DIMENSION_STEP_CM,
        }
    }
}

fn to_mm(size_cm: [f64; 3]) -> CuboidDimensions {
    CuboidDimensions::new(
        size_cm[0] * MM_PER_CM,
        size_cm[1] * MM_PER_CM,
        size_cm[2] * MM_PER_CM,
    )
}

impl DimensionMapper {
    pub fn with_step(step_cm: f64) -> Self {
        Self {
            step_cm,
            ..Default::default()
        }
    }

    pub fn min_volume(&self) -> f64 {
        self.min_cm.iter().product()
    }

    pub fn max_volume(&self) -> f64 {
        self.max_cm.iter().product()
    }

    /// Last step index that stays within `[lo, hi]`.
    fn steps(&self, lo: f64, hi: f64) -> usize {
        ((hi - lo) / self.step_cm + 1e-9).floor().max(0.0) as usize
    }

    /// Cuboid in mm for `volume_cm3`.
    ///
    /// Volumes outside the printable range are clamped to the minimum or
    /// maximum cuboid. Returns [`CuboidDimensions::INVALID`] when no
    /// scanned shape fits.
    pub fn dimensions_for(&self, volume_cm3: f64) -> CuboidDimensions {
        if !volume_cm3.is_finite() {
            return CuboidDimensions::INVALID;
        }
        if volume_cm3 < self.min_volume() {
            return to_mm(self.min_cm);
        }
        if volume_cm3 > self.max_volume() {
            return to_mm(self.max_cm);
        }
        if !(self.step_cm > 0.0) {
            return CuboidDimensions::INVALID;
        }

        let [min_x, min_y, min_z] = self.min_cm;
        let [max_x, max_y, max_z] = self.max_cm;

        for i in 0..=self.steps(min_x, max_x) {
            let x = min_x + i as f64 * self.step_cm;
            for j in 0..=self.steps(min_y, max_y) {
                let y = min_y + j as f64 * self.step_cm;
                let z = volume_cm3 / (x * y);
                if (min_z..=max_z).contains(&z) {
                    return to_mm([x, y, z]);
                }
            }
        }

        CuboidDimensions::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_min_volume_clamps() {
        let mapper = DimensionMapper::default();
        for v in [0.0, 1.0, 9.5] {
            assert_eq!(mapper.dimensions_for(v), CuboidDimensions::new(80.0, 80.0, 1.5));
        }
    }

    #[test]
    fn test_above_max_volume_clamps() {
        let mapper = DimensionMapper::default();
        for v in [430.0, 1000.0, 1e9] {
            assert_eq!(mapper.dimensions_for(v), CuboidDimensions::new(150.0, 130.0, 22.0));
        }
    }

    #[test]
    fn test_first_fit_at_minimum_footprint() {
        let dims = DimensionMapper::default().dimensions_for(50.0);
        assert!((dims.x - 80.0).abs() < 1e-9);
        assert!((dims.y - 80.0).abs() < 1e-9);
        assert!((dims.z - 7.8125).abs() < 1e-9);
    }

    #[test]
    fn test_scan_grows_y_before_x() {
        // 200 cm³ at x = 8 needs y >= 11.37 for z <= 2.2; first step is 11.4.
        let dims = DimensionMapper::default().dimensions_for(200.0);
        assert!((dims.x - 80.0).abs() < 1e-9);
        assert!((dims.y - 114.0).abs() < 1e-6);
        assert!(dims.z <= 22.0);
    }

    #[test]
    fn test_non_finite_volume_is_invalid() {
        let mapper = DimensionMapper::default();
        assert_eq!(mapper.dimensions_for(f64::NAN), CuboidDimensions::INVALID);
    }

    #[test]
    fn test_no_fit_with_coarse_step() {
        // With a 10 cm step only x = 8 and y = 8 are scanned.
        let dims = DimensionMapper::with_step(10.0).dimensions_for(300.0);
        assert_eq!(dims, CuboidDimensions::INVALID);
    }
}
