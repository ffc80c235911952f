//! CLI command implementations.
//!
//! One module per subcommand:
//! - **compare**: buggy-vs-fixed complexity comparison over the study projects
//! - **correlate**: Pearson correlation of complexity against defect density
//! - **visualize**: scatter-chart view of the per-project summary statistics

pub mod compare;
pub mod correlate;
pub mod visualize;

use crate::core::{DefectmapError, DefectmapResult, ProjectStats};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load the prior per-project summary statistics consumed by correlate and
/// visualize. Unlike per-defect CSVs, this file is required input.
pub fn load_project_stats(path: &Path) -> DefectmapResult<BTreeMap<String, ProjectStats>> {
    let content = fs::read_to_string(path).map_err(|source| DefectmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DefectmapError::Summary {
        path: path.to_path_buf(),
        source,
    })
}
