pub mod errors;
pub mod types;

pub use errors::{DefectmapError, DefectmapResult};
pub use types::{
    round2, ComparisonResults, ComplexityChange, ComplexityRecord, CorrelationResult, DataPoint,
    Direction, Field, Measurement, OverallSummary, ProjectStats, ProjectSummary, Row, Strength,
};
