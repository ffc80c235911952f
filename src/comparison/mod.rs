//! Buggy-vs-fixed complexity comparison across the study projects.

pub mod aggregator;

pub use aggregator::{
    analyze_defect, classify_change, compare_projects, discover_defects, mean_complexity,
    overall_summary, scan_project, summarize, DefectFiles,
};
