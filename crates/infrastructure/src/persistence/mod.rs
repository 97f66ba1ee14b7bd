//! File system persistence adapters.

mod file_text_store;

pub use file_text_store::{DEFAULT_MAX_INPUT_BYTES, FileTextStore};
