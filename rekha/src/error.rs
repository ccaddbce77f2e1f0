//! Error types for Rekha

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rekha error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Finder or fit parameters violate their preconditions
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Weighted mean requested over no entities
    #[error("Entities list must not be empty")]
    EmptyEntities,

    /// Coordinator intervals neither overlap nor touch
    #[error("Intervals must intersect to merge: left ends at {left_end}, right starts at {right_start}")]
    DisjointIntervals {
        /// Exclusive end index of the earlier interval
        left_end: usize,
        /// Start index of the later interval
        right_start: usize,
    },

    /// Merge attempted on an entity built without points
    #[error("No points found to merge")]
    MissingPoints,

    /// Too few points for the requested fit
    #[error("Insufficient points: required {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points
        required: usize,
        /// Number of points supplied
        actual: usize,
    },

    /// Line defined by two coincident points
    #[error("Line requires two distinct points")]
    DegenerateLine,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scan file contents
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be decoded
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
