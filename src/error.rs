use thiserror::Error;

/// Errors returned by the classification core in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw input row failed validation.
    #[error("invalid sample at row {row}, field {field}: {message}")]
    InvalidSample {
        /// 0-based index of the offending row.
        row: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// The training data referenced by a hyperparameter no longer exists.
    #[error("broken reference: training data has been dropped")]
    BrokenReference,

    /// A sample collection is too small for the requested operation.
    #[error("insufficient data: {context} has {available} samples, need {needed}")]
    InsufficientData {
        /// Which collection was too small.
        context: &'static str,
        /// Minimum number of samples required.
        needed: usize,
        /// Number of samples actually present.
        available: usize,
    },

    /// Sorensen distance is undefined for two all-zero samples.
    #[error("invalid metric input: sorensen denominator is zero")]
    InvalidMetricInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
