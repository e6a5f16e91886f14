pub mod food;
pub mod nutrients;
pub mod profile;
pub mod recommendation;

pub use food::{CATALOG, FoodCandidate};
pub use nutrients::{Macro, NutrientProfile};
pub use profile::{ActivityLevel, DietProfile, RecommendationRequest, Sex};
pub use recommendation::{
    CuboidDimensions, FoodItem, Recommendation, RecommendationEntry, SolutionCandidate,
    SolveOutcome,
};
