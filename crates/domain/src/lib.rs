//! Paramsub Domain - Core parameter types
//!
//! This crate defines the data model shared by every layer of paramsub:
//! parameter references, resolved parameter info, resolve options and the
//! collections passed between the resolution stages.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod parameter;

pub use error::{DomainError, DomainResult};
pub use parameter::{
    ParameterInfo, ParameterType, ReferenceSet, ResolutionMap, ResolveOptions, SECURE_PREFIX,
    is_secure_reference, validate_reference,
};
