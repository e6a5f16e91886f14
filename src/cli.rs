use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Supplement planner: how much of which food closes today's macro gap.
#[derive(Parser, Debug)]
#[command(name = "supplement_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON settings file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend food amounts. Missing values are prompted for.
    Recommend(RecommendArgs),

    /// Convert a quantity and unit to grams.
    Convert {
        quantity: f64,
        unit: String,
        /// Food description, used for size defaults.
        food: String,
    },

    /// Show the macros in a quantity of a catalog food.
    Lookup {
        food: String,
        quantity: f64,
        unit: String,
    },

    /// Show the printable cuboid for a volume in cm³.
    Dimensions { volume: f64 },

    /// List the supplementation catalog.
    Catalog,

    /// Write the default settings to a JSON file.
    WriteConfig { path: PathBuf },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend(RecommendArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct RecommendArgs {
    /// 0 = male, 1 = female.
    #[arg(long)]
    pub sex: Option<i64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Carbohydrate already eaten today (g).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Protein already eaten today (g).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Fat already eaten today (g).
    #[arg(long)]
    pub fat: Option<f64>,

    /// 0 = sedentary, 1 = light, 2 = moderate, 3 = very active.
    #[arg(long)]
    pub activity: Option<i64>,

    /// 0 = balanced, 1 = low fat, 2 = low carb, 3 = high protein.
    #[arg(long)]
    pub diet: Option<i64>,

    /// 1 to exclude chicken breast instead of red lentils.
    #[arg(long)]
    pub preference: Option<i64>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write result items to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
