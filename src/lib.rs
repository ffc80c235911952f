// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod correlation;
pub mod extraction;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    ComparisonResults, ComplexityChange, ComplexityRecord, CorrelationResult, DataPoint,
    Direction, Field, Measurement, OverallSummary, ProjectStats, ProjectSummary, Row, Strength,
};

pub use crate::comparison::{classify_change, compare_projects, mean_complexity, summarize};
pub use crate::correlation::{analyze, pearson};
pub use crate::extraction::extract_complexity;
