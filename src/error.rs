use std::{io, num::ParseFloatError};

/// Errors produced while reading data, growing trees or scoring predictions.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Impurity was requested for a set with no samples.
    #[error("Cannot compute impurity of an empty partition.")]
    EmptyPartition,
    /// A model was fitted on zero samples.
    #[error("The dataset is empty.")]
    EmptyDataset,
    /// `predict` was called before `fit`.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// A parameter setter rejected its value.
    #[error("{0}")]
    InvalidParameter(String),
    /// Predictions and labels are of different sizes.
    #[error("Predictions and labels are of different sizes ({expected} vs {actual}).")]
    LengthMismatch { expected: usize, actual: usize },
    /// A label outside of {0, 1} was passed to a binary metric.
    #[error("Label {0} is not binary.")]
    InvalidLabel(u8),
    #[error("Missing column {column} in record {record}.")]
    MissingColumn { column: usize, record: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("ParseFloat error: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
