//! Defines the error type of this crate.
use std::io;
use std::num::ParseFloatError;

use thiserror::Error;


/// A `Result` alias whose error type is [`C45Error`].
pub type Result<T> = std::result::Result<T, C45Error>;


/// Errors raised while evaluating splits, reading samples,
/// or building trees.
#[derive(Error, Debug)]
pub enum C45Error {
    /// A continuous attribute has a value that is not a number.
    #[error("Value `{value}` of attribute `{attribute}` is not a number: {source}")]
    Parse {
        /// Name of the attribute.
        attribute: String,
        /// The raw text that failed to parse.
        value: String,
        /// Underlying parse error.
        source: ParseFloatError,
    },

    /// A continuous attribute has a `NaN` or infinite value.
    #[error("Value `{value}` of attribute `{attribute}` is not finite")]
    NonFinite {
        /// Name of the attribute.
        attribute: String,
        /// The raw text of the value.
        value: String,
    },

    /// An instance has no value for the requested attribute.
    #[error("Instance has no value for attribute `{attribute}`")]
    MissingValue {
        /// Name of the attribute.
        attribute: String,
    },

    /// The best attribute is requested from an empty candidate list.
    #[error("Cannot select the best attribute from an empty attribute list")]
    EmptyAttributeList,

    /// A tree is requested from a sample with no instances.
    #[error("Cannot build a tree from an empty sample")]
    EmptySample,

    /// An instance is labeled outside of the target-value universe.
    #[error("Target value `{label}` is not a member of the target values")]
    UnknownTarget {
        /// The offending label.
        label: String,
    },

    /// A malformed row in a sample file.
    #[error("Malformed sample at line {line}: {message}")]
    Format {
        /// 1-origin line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
