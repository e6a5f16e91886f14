use dialoguer::{Input, Select};

use crate::cli::RecommendArgs;
use crate::error::{Result, SupplementError};
use crate::models::{NutrientProfile, RecommendationRequest};

/// Prompt for a number with a default.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| SupplementError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for one of a fixed list of options; returns its index.
pub fn prompt_choice(prompt: &str, options: &[&str], default: usize) -> Result<i64> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(selection as i64)
}

fn number_or_prompt(value: Option<f64>, prompt: &str, default: f64) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => prompt_number(prompt, default),
    }
}

fn choice_or_prompt(
    value: Option<i64>,
    prompt: &str,
    options: &[&str],
    default: usize,
) -> Result<i64> {
    match value {
        Some(v) => Ok(v),
        None => prompt_choice(prompt, options, default),
    }
}

/// Build a request from command-line values, prompting for anything missing.
pub fn collect_request(args: &RecommendArgs) -> Result<RecommendationRequest> {
    let sex = choice_or_prompt(args.sex, "Sex", &["Male", "Female"], 0)?;
    let age = number_or_prompt(args.age, "Age (years)", 30.0)?;
    let height = number_or_prompt(args.height, "Height (cm)", 170.0)?;
    let weight = number_or_prompt(args.weight, "Weight (kg)", 70.0)?;
    let carbs = number_or_prompt(args.carbs, "Carbohydrate eaten today (g)", 0.0)?;
    let protein = number_or_prompt(args.protein, "Protein eaten today (g)", 0.0)?;
    let fat = number_or_prompt(args.fat, "Fat eaten today (g)", 0.0)?;
    let activity = choice_or_prompt(
        args.activity,
        "Activity level",
        &["Sedentary", "Lightly active", "Moderately active", "Very active"],
        1,
    )?;
    let diet = choice_or_prompt(
        args.diet,
        "Diet",
        &["Balanced", "Low fat", "Low carb", "High protein"],
        0,
    )?;
    let preference = choice_or_prompt(
        args.preference,
        "Food preference",
        &["No chicken restriction (skip lentils)", "Vegetarian (skip chicken)"],
        0,
    )?;

    RecommendationRequest::from_raw(
        sex,
        age,
        height,
        weight,
        NutrientProfile::new(carbs, protein, fat),
        activity,
        diet,
        preference,
    )
}
