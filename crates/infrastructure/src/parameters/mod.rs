//! Parameter store adapters.

mod file_store;
mod in_memory;

pub use file_store::FileParameterStore;
pub use in_memory::InMemoryParameterStore;
