use crate::comparison;
use crate::config::DataLayout;
use crate::io;
use crate::report;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the complexity comparison and write the JSON and HTML artifacts.
pub fn run(root: &Path) -> Result<()> {
    let layout = DataLayout::new(root);
    let results = comparison::compare_projects(&layout)?;

    io::ensure_dir(&layout.results_dir())?;

    let json_path = layout.comparison_results_json();
    let json = serde_json::to_string_pretty(&results)?;
    io::write_file(&json_path, &json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let report_path = layout.comparison_report_html();
    let html = report::render_comparison_report(&results);
    io::write_file(&report_path, &html)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    let overall = &results.overall;
    println!("Analyzed {} defects across {} projects:", overall.total_defects, results.by_project.len());
    println!("  increased: {}", overall.complexity_increased);
    println!("  decreased: {}", overall.complexity_decreased);
    println!("  unchanged: {}", overall.complexity_unchanged);
    println!("Results saved to:");
    println!("- {}", json_path.display());
    println!("- {}", report_path.display());

    Ok(())
}
