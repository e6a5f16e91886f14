pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod lookup;
pub mod models;
pub mod planner;

pub use config::RecommenderConfig;
pub use error::{Result, SupplementError};
pub use models::{NutrientProfile, Recommendation, RecommendationRequest};
