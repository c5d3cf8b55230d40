use serde::{Serialize, Deserialize};

use std::fmt;


/// A feature column of a sample.
/// The `name` is the key into [`Instance`](crate::Instance) values.
///
/// Only continuous attributes take part in the gain-ratio criterion;
/// the others always score zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    is_continuous: bool,
}


impl Attribute {
    /// Construct a new attribute.
    #[inline]
    pub fn new<T: ToString>(name: T, is_continuous: bool) -> Self {
        let name = name.to_string();
        Self { name, is_continuous }
    }


    /// Construct a continuous attribute.
    #[inline]
    pub fn continuous<T: ToString>(name: T) -> Self {
        Self::new(name, true)
    }


    /// Construct a discrete attribute.
    #[inline]
    pub fn discrete<T: ToString>(name: T) -> Self {
        Self::new(name, false)
    }


    /// Returns the attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns `true` if the attribute takes real values.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.is_continuous
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_continuous { "continuous" } else { "discrete" };
        write!(f, "{} ({kind})", self.name)
    }
}
