//! Paramsub Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod parameters;
pub mod persistence;
pub mod serialization;

pub use parameters::{FileParameterStore, InMemoryParameterStore};
pub use persistence::{DEFAULT_MAX_INPUT_BYTES, FileTextStore};
pub use serialization::{DocumentFormat, SerializationError, from_json, from_yaml, to_json_stable};
