use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested cluster count is incompatible with the dataset.
    ///
    /// Raised when `k == 0` or when `k` exceeds the number of observations.
    #[error("invalid configuration: requested {requested} clusters, but dataset has {n_items} items")]
    InvalidConfiguration {
        /// Requested number of clusters.
        requested: usize,
        /// Number of observations in the dataset.
        n_items: usize,
    },

    /// Observations in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch at row {row}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Offending row (observation position).
        row: usize,
        /// Expected dimensionality (width of the first observation).
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

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
