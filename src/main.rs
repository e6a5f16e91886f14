use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use supplement_planner::cli::{Cli, Command, RecommendArgs};
use supplement_planner::config::{RecommenderConfig, load_config, save_config};
use supplement_planner::error::Result;
use supplement_planner::interface::{
    collect_request, display_catalog, display_dimensions, display_recommendation, write_csv,
};
use supplement_planner::lookup::{CatalogLookup, NeverExpire, NutrientCache, lookup_quantity};
use supplement_planner::models::CATALOG;
use supplement_planner::planner::{DimensionMapper, recommend, to_grams};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading settings from {}", path.display());
            load_config(path)?
        }
        None => RecommenderConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Recommend(args) => cmd_recommend(&args, &config),
        Command::Convert {
            quantity,
            unit,
            food,
        } => {
            println!("{:.2} g", to_grams(quantity, &unit, &food));
            Ok(())
        }
        Command::Lookup {
            food,
            quantity,
            unit,
        } => cmd_lookup(&food, quantity, &unit),
        Command::Dimensions { volume } => {
            let mapper = DimensionMapper::with_step(config.dimension_step_cm);
            display_dimensions(volume, &mapper.dimensions_for(volume));
            Ok(())
        }
        Command::Catalog => {
            display_catalog(&CATALOG);
            Ok(())
        }
        Command::WriteConfig { path } => {
            save_config(&path, &config)?;
            println!("Settings written to {}", path.display());
            Ok(())
        }
    }
}

/// Compute and show a recommendation.
fn cmd_recommend(args: &RecommendArgs, config: &RecommenderConfig) -> Result<()> {
    let request = collect_request(args)?;
    info!("Using settings: {}", config.display());

    let rec = recommend(&request, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec.to_json())?);
    } else {
        display_recommendation(&rec);
    }

    if let Some(path) = &args.csv {
        write_csv(&rec, path)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}

/// Show the macros in a quantity of a catalog food.
fn cmd_lookup(food: &str, quantity: f64, unit: &str) -> Result<()> {
    let lookup = CatalogLookup::default();
    let mut cache = NutrientCache::new(NeverExpire, CATALOG.len());

    let grams = to_grams(quantity, unit, food);
    let macros = lookup_quantity(&lookup, &mut cache, food, quantity, unit)?;

    println!(
        "{} {} {} = {:.2} g -> C:{:.2} P:{:.2} F:{:.2}",
        quantity, unit, food, grams, macros.carbohydrate, macros.protein, macros.fat
    );
    Ok(())
}
