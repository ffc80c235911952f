use super::load_project_stats;
use crate::config::DataLayout;
use crate::core::DefectmapError;
use crate::correlation;
use crate::io;
use anyhow::{Context, Result};
use std::path::Path;

/// Correlate average complexity with defect density over the prior summary
/// statistics and write the correlation artifact.
pub fn run(root: &Path) -> Result<()> {
    let layout = DataLayout::new(root);
    let summary_path = layout.analysis_summary();
    let stats = load_project_stats(&summary_path)?;

    // The correlation needs at least one usable pair
    if !stats.values().any(|s| s.avg_complexity.is_applicable()) {
        return Err(DefectmapError::EmptySummary { path: summary_path }.into());
    }

    let result = correlation::analyze(&stats);

    io::ensure_dir(&layout.results_dir())?;
    let out_path = layout.correlation_json();
    let json = serde_json::to_string_pretty(&result)?;
    io::write_file(&out_path, &json)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("Correlation Analysis Results:");
    println!("---------------------------");
    println!(
        "Pearson correlation coefficient: {:.4}",
        result.pearson_correlation
    );
    println!("Strength of correlation: {}", result.strength.display_name());
    println!("Direction: {}", result.direction.display_name());
    println!("Analysis saved to {}", out_path.display());

    Ok(())
}
