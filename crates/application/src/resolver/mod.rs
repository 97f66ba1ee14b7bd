//! Parameter resolution module
//!
//! Provides parsing and resolution of `{{ reference }}` placeholders.
//!
//! # Usage
//!
//! ```
//! use async_trait::async_trait;
//! use paramsub_application::ParameterResolver;
//! use paramsub_application::ports::{ParameterStore, ParameterStoreError};
//! use paramsub_domain::{ParameterInfo, ReferenceSet, ResolutionMap, ResolveOptions};
//!
//! struct Fixed;
//!
//! #[async_trait]
//! impl ParameterStore for Fixed {
//!     async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError> {
//!         Ok(references.iter().map(|r| (r, ParameterInfo::string("localhost"))).collect())
//!     }
//! }
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let resolver = ParameterResolver::new(Fixed);
//! let resolved = resolver
//!     .resolve_parameters_in_text("http://{{ app/host }}/api", &ResolveOptions::default())
//!     .await
//!     .unwrap();
//! assert_eq!(resolved.text, "http://localhost/api");
//! # });
//! # }
//! ```

pub mod engine;
pub mod parser;
pub mod policy;
pub mod substitution;

pub use engine::{ParameterResolver, ResolvedText};
pub use parser::{ParsedPlaceholders, has_placeholders, parse_references, scan_placeholders};
pub use policy::enforce_secure_policy;
pub use substitution::{Substitution, substitute};
