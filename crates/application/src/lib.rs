//! Paramsub Application - Parameter placeholder resolution
//!
//! This crate holds the resolution core: the placeholder parser, the secure
//! parameter policy filter, the substitution engine, and the ports through
//! which the core reaches a parameter store and text storage.
//!
//! Control flow for a document is parse, lookup, filter, substitute. Every
//! stage fails fast and the first error aborts the whole operation.

pub mod error;
pub mod ports;
pub mod resolver;
pub mod use_cases;

pub use error::{ErrorKind, ResolveError, ResolveResult};
pub use resolver::ParameterResolver;
pub use use_cases::{ResolveFile, ResolveFileOutput};
