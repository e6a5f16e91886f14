use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::Recommendation;

/// Write one CSV row per recommended food item.
pub fn write_csv(rec: &Recommendation, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank", "food", "mesh", "gram", "x_mm", "y_mm", "z_mm", "residual",
    ])?;

    for (i, entry) in rec.results.iter().enumerate() {
        for item in &entry.items {
            wtr.write_record([
                (i + 1).to_string(),
                item.name.clone(),
                item.mesh.clone(),
                format!("{:.2}", item.gram),
                format!("{:.2}", item.x),
                format!("{:.2}", item.y),
                format!("{:.2}", item.z),
                format!("{:.3}", entry.residual),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the caller-facing JSON mapping to a file.
pub fn write_json(rec: &Recommendation, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&rec.to_json())?.as_bytes())?;
    Ok(())
}
