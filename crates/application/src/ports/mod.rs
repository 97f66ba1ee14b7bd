//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod parameter_store;
mod text_store;

pub use parameter_store::{ParameterStore, ParameterStoreError};
pub use text_store::{TextStore, TextStoreError};
