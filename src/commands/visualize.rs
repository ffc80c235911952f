use super::load_project_stats;
use crate::config::DataLayout;
use crate::io;
use crate::report;
use anyhow::{Context, Result};
use std::path::Path;

/// Render the defect-density scatter visualization from the prior summary
/// statistics.
pub fn run(root: &Path) -> Result<()> {
    let layout = DataLayout::new(root);
    let stats = load_project_stats(&layout.analysis_summary())?;

    io::ensure_dir(&layout.results_dir())?;
    let out_path = layout.visualization_html();
    let html = report::render_visualization(&stats);
    io::write_file(&out_path, &html)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("Visualization generated at {}", out_path.display());

    Ok(())
}
