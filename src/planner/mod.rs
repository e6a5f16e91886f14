pub mod constants;
pub mod dimensions;
pub mod energy;
pub mod ranking;
pub mod solver;
pub mod units;

pub use constants::*;
pub use dimensions::DimensionMapper;
pub use energy::{daily_calories, macro_targets, resting_rate};
pub use ranking::{annotate_solution, recommend};
pub use solver::{CandidateSolver, candidate_pairs};
pub use units::{Unit, to_grams};
