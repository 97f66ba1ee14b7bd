//! Application use cases (resolution orchestration over ports).

mod resolve_file;

pub use resolve_file::{ResolveFile, ResolveFileOutput};
