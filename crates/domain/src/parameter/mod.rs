//! Parameter domain types

mod info;
mod options;
mod reference;
mod reference_set;
mod resolution;

pub use info::{ParameterInfo, ParameterType};
pub use options::ResolveOptions;
pub use reference::{SECURE_PREFIX, is_secure_reference, validate_reference};
pub use reference_set::ReferenceSet;
pub use resolution::ResolutionMap;
