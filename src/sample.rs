//! Types describing a labeled training set.

// Provides the attribute (feature column) struct.
pub(crate) mod attribute;
// Provides the labeled instance struct.
pub(crate) mod instance;
// Provides the target-value universe.
pub(crate) mod target_values;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute::Attribute;
pub use instance::Instance;
pub use target_values::TargetValues;
pub use sample_struct::Sample;
pub use sample_reader::{SampleReader, DEFAULT_TARGET};
