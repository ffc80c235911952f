use std::path::PathBuf;

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum DefectmapError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed summary file {path}: {source}")]
    Summary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("summary file {path} contains no usable project statistics")]
    EmptySummary { path: PathBuf },
}

/// Result type alias
pub type DefectmapResult<T> = Result<T, DefectmapError>;
