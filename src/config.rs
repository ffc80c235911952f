//! Fixed study configuration: project list, thresholds, and the conventional
//! on-disk layout of input and output data.

use std::path::{Path, PathBuf};

/// Projects included in the study, processed in this order.
pub const PROJECTS: [&str; 6] = ["Closure", "Collections", "Lang", "Math", "Mockito", "Time"];

/// Tolerance band for classifying a complexity change. Mean complexities
/// within this distance of each other count as unchanged; reference outputs
/// depend on this exact value.
pub const CHANGE_THRESHOLD: f64 = 0.02;

/// Positional rows are only scanned this far for a complexity message.
pub const MAX_POSITIONAL_FIELDS: usize = 10;

/// Path conventions under the data root.
///
/// All inputs and artifacts live at fixed locations relative to one root
/// directory; the CLI only ever chooses the root.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding one subdirectory of per-defect CSVs per project.
    pub fn comparison_dir(&self) -> PathBuf {
        self.root.join("data").join("complexity-comparison")
    }

    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.comparison_dir().join(project)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root.join("data").join("results")
    }

    /// Prior per-project summary statistics (input to correlate/visualize).
    pub fn analysis_summary(&self) -> PathBuf {
        self.results_dir().join("analysis-results.json")
    }

    pub fn comparison_results_json(&self) -> PathBuf {
        self.results_dir().join("complexity-comparison-results.json")
    }

    pub fn comparison_report_html(&self) -> PathBuf {
        self.results_dir().join("complexity-comparison-report.html")
    }

    pub fn correlation_json(&self) -> PathBuf {
        self.results_dir().join("correlation-analysis.json")
    }

    pub fn visualization_html(&self) -> PathBuf {
        self.results_dir().join("visualization.html")
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_list_is_alphabetical() {
        // byProject serializes through a BTreeMap; declared order must match
        let mut sorted = PROJECTS;
        sorted.sort_unstable();
        assert_eq!(sorted, PROJECTS);
    }

    #[test]
    fn layout_paths_are_rooted() {
        let layout = DataLayout::new("/tmp/study");
        assert_eq!(
            layout.project_dir("Lang"),
            PathBuf::from("/tmp/study/data/complexity-comparison/Lang")
        );
        assert_eq!(
            layout.correlation_json(),
            PathBuf::from("/tmp/study/data/results/correlation-analysis.json")
        );
    }
}
